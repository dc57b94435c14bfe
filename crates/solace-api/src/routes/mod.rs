pub mod assessments;
pub mod health;
pub mod inquiries;
pub mod notes;
pub mod records;
pub mod resources;
pub mod users;

use std::collections::HashMap;

use solace_core::view::{DateRange, Facet, Filterable, PageSize, ViewModel};

use crate::error::ApiError;

/// Query string of every list endpoint.
pub type ListParams = HashMap<String, String>;

fn parse_date(params: &ListParams, name: &str) -> Result<Option<jiff::civil::Date>, ApiError> {
    params
        .get(name)
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|e| ApiError::BadRequest(format!("invalid {name} date '{v}': {e}")))
        })
        .transpose()
}

/// Build a view from `search`, the entity's selectors, `from`/`to`,
/// `rows`, and `page`.
pub fn view_from_params<T: Filterable>(params: &ListParams) -> Result<ViewModel<T>, ApiError> {
    let mut view = ViewModel::new();

    if let Some(search) = params.get("search") {
        view.set_search(search.as_str());
    }
    for facet in <T::Facet as Facet>::ALL {
        if let Some(value) = params.get(facet.param()) {
            view.set_selector(*facet, value.as_str());
        }
    }
    view.set_date_range(DateRange {
        from: parse_date(params, "from")?,
        to: parse_date(params, "to")?,
    });
    if let Some(rows) = params.get("rows") {
        let size: PageSize = rows
            .parse()
            .map_err(|e: solace_core::view::PageSizeError| ApiError::BadRequest(e.to_string()))?;
        view.set_page_size(size);
    }
    // Last, since every filter input above resets the page.
    if let Some(page) = params.get("page") {
        let page = page
            .trim()
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("invalid page '{page}'")))?;
        view.set_page(page);
    }

    Ok(view)
}
