/// Cuts the page starting at `offset` out of the ordered matches.
///
/// Returns `None` when `offset` is at or past the end, which includes an
/// empty match list at offset zero.
pub fn page_from_offset<T>(mut items: Vec<T>, offset: usize) -> Option<Vec<T>> {
    if offset >= items.len() {
        return None;
    }
    Some(items.split_off(offset))
}
