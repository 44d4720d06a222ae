use anyhow::Result;
use async_trait::async_trait;

use api::image::{GetImageReq, ImageRecord, ImageUuid, get_image};

// image resolution collaborator
//
// the session only ever needs "give me the full record for this uuid", so the
// picker dialog, the tests, and the http client all sit behind this one seam.
// not Send: the session is single-threaded client state, and the http futures
// underneath the api crate are not Send on the web target.
#[async_trait(?Send)]
pub trait ImageResolver {
    async fn resolve(&self, image_uuid: ImageUuid) -> Result<ImageRecord>;
}

// production resolver backed by the GetImage endpoint
#[derive(Clone, Debug, Default)]
pub struct ApiResolver {}

impl ApiResolver {
    pub fn new() -> Self {
        ApiResolver {}
    }
}

#[async_trait(?Send)]
impl ImageResolver for ApiResolver {
    async fn resolve(&self, image_uuid: ImageUuid) -> Result<ImageRecord> {
        let resp = get_image(&GetImageReq { image_uuid }).await?;

        Ok(resp.image)
    }
}
