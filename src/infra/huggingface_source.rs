use crate::app::ports::DatasetSourcePort;
use crate::config::AcquireConfig;
use crate::domain::RawTable;
use crate::error::{Result, SampleDataError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, instrument};

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// One page of the dataset viewer's `/rows` response
#[derive(Debug, Deserialize)]
pub struct RowsPage {
    pub features: Vec<Feature>,
    pub rows: Vec<PageRow>,
    #[serde(default)]
    pub num_rows_total: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PageRow {
    pub row: Map<String, Value>,
}

/// Reads a dataset split page by page from the Hugging Face dataset viewer
pub struct HuggingFaceRowsSource {
    client: reqwest::blocking::Client,
    config: AcquireConfig,
}

impl HuggingFaceRowsSource {
    pub fn new(config: AcquireConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("yt_sample_data/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    fn fetch_page(&self, offset: usize, length: usize) -> Result<RowsPage> {
        debug!("Requesting rows {}..{}", offset, offset + length);
        let offset_param = offset.to_string();
        let length_param = length.to_string();
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("dataset", self.config.dataset.as_str()),
                ("config", self.config.config.as_str()),
                ("split", self.config.split.as_str()),
                ("offset", offset_param.as_str()),
                ("length", length_param.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SampleDataError::Source {
                message: format!(
                    "{} returned HTTP {} for {} at offset {}: {}",
                    self.config.endpoint,
                    status.as_u16(),
                    self.config.dataset,
                    offset,
                    body.trim()
                ),
            });
        }

        Ok(response.json::<RowsPage>()?)
    }
}

impl DatasetSourcePort for HuggingFaceRowsSource {
    #[instrument(skip(self), fields(dataset = %self.config.dataset))]
    fn fetch_rows(&self, limit: usize) -> Result<RawTable> {
        info!("Downloading first {} records", limit);
        collect_pages(limit, self.config.page_size, |offset, length| {
            self.fetch_page(offset, length)
        })
    }
}

/// Pulls pages until `limit` rows are collected or the split runs out.
/// The header is taken from the first page's features, in schema order.
pub fn collect_pages<F>(limit: usize, page_size: usize, mut fetch: F) -> Result<RawTable>
where
    F: FnMut(usize, usize) -> Result<RowsPage>,
{
    let mut table = RawTable::default();
    let mut offset = 0;

    while table.len() < limit {
        let length = (limit - table.len()).min(page_size);
        let page = fetch(offset, length)?;

        if table.columns.is_empty() {
            table.columns = page.features.into_iter().map(|f| f.name).collect();
        }

        let received = page.rows.len().min(length);
        for page_row in page.rows.into_iter().take(length) {
            let cells = table
                .columns
                .iter()
                .map(|column| render_cell(page_row.row.get(column).unwrap_or(&Value::Null)))
                .collect();
            table.rows.push(cells);
        }
        offset += received;

        let exhausted = page.num_rows_total.is_some_and(|total| offset >= total);
        if received < length || exhausted {
            debug!("Source exhausted at offset {}", offset);
            break;
        }
    }

    Ok(table)
}

/// Renders a JSON cell as CSV text: null is empty, strings are verbatim
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
