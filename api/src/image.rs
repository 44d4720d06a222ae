use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

pub type ImageUuid = i64;

// denormalized snapshot of an image asset
//
// this is embedded into gallery entries so that the editor can render a row
// without a second fetch; the asset itself (and its tag set) stays owned by
// the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub image_uuid: ImageUuid,
    pub title: String,
    pub url: String,
    pub tags: HashSet<String>,
}

// messages

// fetch a single image record
//
// this is what the editor calls to resolve picker selections into the
// snapshots it embeds
endpoint!(GetImage);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetImageReq {
    pub image_uuid: ImageUuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetImageResp {
    pub image: ImageRecord,
}

// search images for the picker dialog
//
// defaults to ""
endpoint!(SearchImages);

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchImagesReq {
    pub filter: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchImagesResp {
    pub images: Vec<ImageRecord>,
}
