// file: src/utils/template.rs
// description: HTML page skeleton with placeholder substitution
// reference: Internal code standards

const DEFAULT_PAGE: &str = "<html>\n\
\t<head>\n\
\t\t<meta charset=\"utf-8\">\n\
\t\t<title>{title}</title>\n\
\t</head>\n\
\n\
\t<body>\n\
\t<h4>{heading}</h4>\n\
\t<ul>\n\
{items}\
\t</ul>\n\
\t</body>\n\
</html>\n";

pub struct PageTemplate {
    template: String,
}

impl PageTemplate {
    pub fn new() -> Self {
        Self {
            template: DEFAULT_PAGE.to_string(),
        }
    }

    /// Fill the skeleton. `items` is substituted last so placeholder-looking
    /// text inside it is left untouched.
    pub fn generate(&self, title: &str, heading: &str, items: &str) -> String {
        self.template
            .replace("{title}", title)
            .replace("{heading}", heading)
            .replace("{items}", items)
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_generation() {
        let template = PageTemplate::new();
        let result = template.generate("Search results", "Found surnames:", "\t\t<li>Skin</li>\n");

        assert!(result.contains("<title>Search results</title>"));
        assert!(result.contains("<h4>Found surnames:</h4>"));
        assert!(result.contains("<ul>\n\t\t<li>Skin</li>\n\t</ul>"));
    }

    #[test]
    fn test_items_substituted_last() {
        let template = PageTemplate::new();
        let result = template.generate("T", "H", "<li>{title}</li>");
        assert!(result.contains("<li>{title}</li>"));
    }
}
