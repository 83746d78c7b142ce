//! Manual pages rendered from the command tree at build time.

include!(concat!(env!("OUT_DIR"), "/man_pages.rs"));

/// The page for `homedash` itself or a command path such as `devices add`.
pub fn page(command: &[String]) -> Option<&'static str> {
    let name = std::iter::once("homedash")
        .chain(command.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("-");
    PAGES
        .iter()
        .find(|(page_name, _)| *page_name == name)
        .map(|(_, roff)| *roff)
}
