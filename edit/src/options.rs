use serde::{Deserialize, Serialize};

// edit session options
//
// hosts keep these inside their own config documents, so parsing expects the
// options as an [edit] sub-table of a larger file
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EditOptions {
    // renumber the stored order as soon as a removal commits, instead of
    // leaving the numbering sparse until the next save
    pub restamp_on_remove: bool,
}

#[derive(Debug, Deserialize)]
struct TomlOptionsFile {
    edit: EditOptions,
}

pub fn read_options(doc: &str) -> anyhow::Result<EditOptions> {
    let data: TomlOptionsFile = toml::from_str(doc)?;

    Ok(data.edit)
}
