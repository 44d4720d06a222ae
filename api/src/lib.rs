pub mod gallery;
pub mod image;

// string validation
//
// entry uuids travel as strings so that client-synthesized placeholders and
// server-assigned ids can share one field; these patterns pin down the two
// shapes the server will accept (see gallery.rs for the helpers)
pub const ENTRY_UUID_REGEX: &str = r"^[a-zA-Z0-9_.-]{1,64}$";
pub const TEMP_ENTRY_REGEX: &str = r"^temp-\d+-\d+$";

#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste!{
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post(format!("/darkroom/api/{}", stringify!([<$name:camel>])).as_str())
                    .json(&req.clone())?
                    .send()
                    .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}
