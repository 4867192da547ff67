// Mouse input: map a click on the board to a column
use web_sys::{Element, Event};
use wasm_bindgen::JsCast;
use protocol::COLUMNS;

/// Column under a click, if any.
///
/// The click may land on a cell or on the column itself, so walk up from the
/// target to the nearest element carrying `data-column`.
pub fn clicked_column(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let column_el = target.closest("[data-column]").ok().flatten()?;
    parse_column(column_el.get_attribute("data-column").as_deref())
}

/// Parse a `data-column` value. Anything that is not a column index on the
/// board maps to `None`.
pub fn parse_column(value: Option<&str>) -> Option<usize> {
    value?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&column| column < COLUMNS)
}
