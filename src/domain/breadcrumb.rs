/// Renders a short disambiguating label from a breadcrumb path.
///
/// A full root-to-category path can get arbitrarily long; the immediate
/// parent plus the category name disambiguates the common case, so the
/// formatter keeps at most the last two path elements.
#[derive(Debug, Clone)]
pub struct BreadcrumbFormatter {
    separator: String,
}

impl BreadcrumbFormatter {
    pub fn new<S: Into<String>>(separator: S) -> Self {
        Self { separator: separator.into() }
    }

    /// Join at most the last two elements of `parts`, in original order.
    ///
    /// Fewer than two elements are joined as-is: an empty path yields an
    /// empty string, a single element is returned without a separator.
    pub fn format(&self, parts: &[String]) -> String {
        let tail = if parts.len() > 2 { &parts[parts.len() - 2..] } else { parts };
        tail.join(&self.separator)
    }
}
