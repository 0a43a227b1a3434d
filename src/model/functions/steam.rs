use crate::model::types::{AppDetailsResponse, Error, SteamMedia};

const APPDETAILS_URL: &str = "https://store.steampowered.com/api/appdetails";

/// Proxied storefront lookup backing `GET /api/steam_media/:app_id`. One
/// upstream call with both filters instead of the two the browser used to
/// make directly.
pub async fn fetch_app_media(
    client: &reqwest::Client,
    app_id: u32,
) -> Result<SteamMedia, Error> {
    let response = client
        .get(APPDETAILS_URL)
        .query(&[
            ("appids", app_id.to_string()),
            ("filters", "movies,screenshots".to_owned()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let details: AppDetailsResponse = response.json().await?;
    Ok(SteamMedia::from_appdetails(app_id, details))
}
