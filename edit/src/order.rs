// pure helpers for the ordered entry list
//
// these are the only functions that touch positions directly; the session
// builds its reorder and save logic out of them

use api::gallery::GalleryEntry;

pub fn position(entries: &[GalleryEntry], uuid: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.uuid == uuid)
}

// true when every entry's stored order already mirrors its index, i.e. the
// persisted numbering and the visible arrangement agree
pub fn order_matches_index(entries: &[GalleryEntry]) -> bool {
    entries
        .iter()
        .enumerate()
        .all(|(idx, entry)| entry.order == idx as i64)
}

pub fn restamp_order(entries: &mut [GalleryEntry]) {
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.order = idx as i64;
    }
}

// move one element to the slot occupied by the target index
//
// everything between the two positions shifts by one; this is the usual
// array move, not a swap.  out-of-range indices leave the list untouched.
pub fn relocate(entries: &mut Vec<GalleryEntry>, from: usize, to: usize) {
    if from == to || from >= entries.len() || to >= entries.len() {
        return;
    }

    let entry = entries.remove(from);
    entries.insert(to, entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use api::image::ImageRecord;

    fn entry(uuid: &str, order: i64) -> GalleryEntry {
        GalleryEntry {
            uuid: uuid.into(),
            image_uuid: order,
            description: None,
            order,
            image: ImageRecord {
                image_uuid: order,
                title: uuid.into(),
                url: format!("/darkroom/media/{uuid}"),
                tags: HashSet::new(),
            },
        }
    }

    fn uuids(entries: &[GalleryEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.uuid.as_str()).collect()
    }

    #[test]
    fn relocate_shifts_forward() {
        let mut entries = vec![entry("a", 0), entry("b", 1), entry("c", 2), entry("d", 3)];

        relocate(&mut entries, 0, 2);

        assert_eq!(uuids(&entries), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn relocate_shifts_backward() {
        let mut entries = vec![entry("a", 0), entry("b", 1), entry("c", 2), entry("d", 3)];

        relocate(&mut entries, 3, 1);

        assert_eq!(uuids(&entries), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn relocate_ignores_bad_indices() {
        let mut entries = vec![entry("a", 0), entry("b", 1)];

        relocate(&mut entries, 0, 5);
        relocate(&mut entries, 5, 0);
        relocate(&mut entries, 1, 1);

        assert_eq!(uuids(&entries), vec!["a", "b"]);
    }

    #[test]
    fn numbering_comparison_and_restamp() {
        let mut entries = vec![entry("a", 0), entry("b", 5), entry("c", 9)];

        assert!(!order_matches_index(&entries));

        restamp_order(&mut entries);

        assert!(order_matches_index(&entries));
        assert_eq!(
            entries.iter().map(|entry| entry.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn empty_list_matches_trivially() {
        assert!(order_matches_index(&[]));
    }
}
