use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use civicmap_core::{
    RenderOptions, ViewBoxReport, fit_view_box, map_to_svg_string,
    model::{County, CountyDetail, county_shapes},
};

use crate::common::js_err;

#[derive(Serialize, Debug, PartialEq)]
struct SkippedDto {
    index: usize,
    error: String,
}

/// JS-facing shape of a fit report: `{ viewBox, skipped: [{ index, error }], overflowed }`.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ReportDto {
    view_box: String,
    skipped: Vec<SkippedDto>,
    overflowed: bool,
}

impl From<&ViewBoxReport> for ReportDto {
    fn from(report: &ViewBoxReport) -> Self {
        Self {
            view_box: report.view_box.to_string(),
            skipped: report.skipped.iter()
                .map(|s| SkippedDto { index: s.index, error: s.error.to_string() })
                .collect(),
            overflowed: report.overflowed,
        }
    }
}

/// viewBox attribute fitting every valid path; malformed paths are skipped.
#[wasm_bindgen]
pub fn view_box(paths: Vec<String>) -> String {
    fit_view_box(&paths).view_box.to_string()
}

/// Like `view_box`, but also returns which paths were skipped and why.
#[wasm_bindgen]
pub fn view_box_report(paths: Vec<String>) -> Result<JsValue, JsValue> {
    let report = ReportDto::from(&fit_view_box(&paths));
    serde_wasm_bindgen::to_value(&report).map_err(|e| e.into())
}

fn options(highlight: Option<String>) -> RenderOptions {
    RenderOptions { highlight, ..Default::default() }
}

/// Render a county detail payload (JSON text) as SVG, one path per constituency.
/// Returns SVG XML string (UI can set innerHTML or create Blob).
#[wasm_bindgen]
pub fn county_svg(detail_json: &str, highlight: Option<String>) -> Result<String, JsValue> {
    let detail: CountyDetail = serde_json::from_str(detail_json)
        .map_err(|e| js_err(format!("Failed to parse county detail: {e}")))?;
    map_to_svg_string(&detail.shapes(), &options(highlight)).map_err(js_err)
}

/// Render a county list payload (JSON text) as the national map.
#[wasm_bindgen]
pub fn counties_svg(counties_json: &str, highlight: Option<String>) -> Result<String, JsValue> {
    let counties: Vec<County> = serde_json::from_str(counties_json)
        .map_err(|e| js_err(format!("Failed to parse county list: {e}")))?;
    map_to_svg_string(&county_shapes(&counties), &options(highlight)).map_err(js_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_box_of_strings() {
        let paths = vec!["M0 0L10 0L10 10L0 10Z".to_string(), "M5 5L15 5L15 15L5 15Z".to_string()];
        assert_eq!(view_box(paths), "0 0 15 15");
    }

    #[test]
    fn report_dto_lists_skipped_paths() {
        let paths = ["M0 0L1 1", "garbage"];
        let dto = ReportDto::from(&fit_view_box(paths));
        assert_eq!(dto.view_box, "0 0 1 1");
        assert_eq!(dto.skipped.len(), 1);
        assert_eq!(dto.skipped[0].index, 1);
        assert!(dto.skipped[0].error.starts_with("malformed path data"));
        assert!(!dto.overflowed);
    }
}
