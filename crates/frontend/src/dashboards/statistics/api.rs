use contracts::dashboards::statistics::StatisticsResponse;
use gloo_net::http::Request;

use crate::domain::colis::filters::FilterState;
use crate::domain::colis::query::encode_query;
use crate::shared::api_utils::api_base;

async fn get_stats(url: String) -> Result<StatisticsResponse, String> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Unfiltered statistics; the deposit-date range is sent when present.
pub async fn fetch_statistics(
    client_id: i64,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<StatisticsResponse, String> {
    let mut pairs: Vec<(&'static str, String)> = Vec::new();
    if let Some(start) = start_date {
        pairs.push(("startDate", start));
    }
    if let Some(end) = end_date {
        pairs.push(("endDate", end));
    }
    let url = format!(
        "{}/colis/client/{}/statistics{}",
        api_base(),
        client_id,
        encode_query(&pairs)
    );
    get_stats(url).await
}

/// Statistics restricted to the active filter fields.
pub async fn fetch_filtered_statistics(
    client_id: i64,
    filters: &FilterState,
) -> Result<StatisticsResponse, String> {
    let url = format!(
        "{}/colis/client/{}/statistics/filtered{}",
        api_base(),
        client_id,
        encode_query(&filters.to_params())
    );
    get_stats(url).await
}
