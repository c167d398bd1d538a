//! Listing gateway: the HTTP calls behind the shipments table.

use contracts::domain::colis::Colis;
use contracts::domain::page::Page;
use gloo_net::http::Request;

use super::filters::FilterState;
use super::query::{encode_query, ListQuery};
use crate::shared::api_utils::api_base;

async fn get_json<T>(url: String) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Plain listing: pagination and sort only.
pub async fn fetch_colis(client_id: i64, query: &ListQuery) -> Result<Page<Colis>, String> {
    let url = format!(
        "{}/colis/client/{}{}",
        api_base(),
        client_id,
        encode_query(&query.to_pairs())
    );
    get_json(url).await
}

/// Filtered listing: pagination and sort plus the active filter fields.
pub async fn fetch_colis_filtered(
    client_id: i64,
    query: &ListQuery,
    filters: &FilterState,
) -> Result<Page<Colis>, String> {
    let url = format!(
        "{}/colis/client/{}/filtered{}",
        api_base(),
        client_id,
        encode_query(&query.to_filtered_pairs(filters))
    );
    get_json(url).await
}

/// Status enumeration as the backend knows it, for the filter select.
pub async fn fetch_status_values() -> Result<Vec<String>, String> {
    get_json(format!("{}/colis/status-values", api_base())).await
}
