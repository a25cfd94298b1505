use serde::{Deserialize, Serialize};

use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Node {
    Element(Element),
    Text(String),
}

/// A single SVG element with its attributes and children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new("line")
            .attr("x1", number(x1))
            .attr("x2", number(x2))
            .attr("y1", number(y1))
            .attr("y2", number(y2))
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new("rect")
            .attr("x", number(x))
            .attr("y", number(y))
            .attr("width", number(width))
            .attr("height", number(height))
    }

    pub fn text(x: f64, y: f64, content: &str) -> Self {
        Self::new("text")
            .attr("x", number(x))
            .attr("y", number(y))
            .content(content)
    }

    pub fn path(d: &str) -> Self {
        Self::new("path").attr("d", d)
    }

    pub fn group() -> Self {
        Self::new("g")
    }

    pub fn translated(x: f64, y: f64) -> Self {
        Self::group().attr("transform", translate(x, y))
    }

    /// Set an attribute, replacing an earlier value of the same name.
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.attributes.iter().position(|(n, _)| *n == name) {
            Some(i) => self.attributes[i].1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn content(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn push(&mut self, element: Element) -> &mut Element {
        self.children.push(Node::Element(element));
        match self.children.last_mut() {
            Some(Node::Element(element)) => element,
            _ => unreachable!("an element was just pushed"),
        }
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search over this element and its descendants.
    pub fn descendants_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in self.children() {
            child.descendants_by_tag(tag, found);
        }
    }

    fn render(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }
        let inline = self.children.iter().all(|c| matches!(c, Node::Text(_)));
        if inline {
            out.push('>');
            for child in &self.children {
                if let Node::Text(text) = child {
                    out.push_str(&escape(text));
                }
            }
            let _ = writeln!(out, "</{}>", self.tag);
            return;
        }
        out.push_str(">\n");
        for child in &self.children {
            match child {
                Node::Element(element) => element.render(out, depth + 1),
                Node::Text(text) => {
                    let _ = writeln!(out, "{}  {}", indent, escape(text));
                }
            }
        }
        let _ = writeln!(out, "{}</{}>", indent, self.tag);
    }
}

/// Drawing context for one chart: an `<svg>` root sized to include the
/// margins and a plot group translated by the top-left margin.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: f64,
    height: f64,
    margin: Margin,
    plot: Element,
}

impl Canvas {
    /// `width` and `height` are the outer dimensions.
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
            plot: Element::translated(margin.left, margin.top),
        }
    }

    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn draw(&mut self, element: Element) -> &mut Element {
        self.plot.push(element)
    }

    pub fn plot(&self) -> &Element {
        &self.plot
    }

    pub fn into_element(self) -> Element {
        Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", number(self.width))
            .attr("height", number(self.height))
            .child(self.plot)
    }

    pub fn render(self) -> String {
        let mut out = String::new();
        self.into_element().render(&mut out, 0);
        out
    }
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate({}, {})", number(x), number(y))
}

pub fn rotate(degrees: f64) -> String {
    format!("rotate({})", number(degrees))
}

/// Shortest decimal form, trimmed to 6 fractional digits.
pub fn number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut text = format!("{:.6}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(number(12.0), "12");
        assert_eq!(number(0.5), "0.5");
        assert_eq!(number(-0.0000001), "0");
        assert_eq!(number(1.0 / 3.0), "0.333333");
        assert_eq!(number(f64::NAN), "0");
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let mut out = String::new();
        Element::text(0.0, 0.0, "Q&A <2>")
            .attr("class", "a\"b")
            .render(&mut out, 0);
        assert_eq!(
            out,
            "<text x=\"0\" y=\"0\" class=\"a&quot;b\">Q&amp;A &lt;2&gt;</text>\n"
        );
    }

    #[test]
    fn attr_replaces_existing() {
        let rect = Element::rect(1.0, 2.0, 3.0, 4.0).attr("x", 9);
        assert_eq!(rect.get_attr("x"), Some("9"));
        assert_eq!(rect.get_attr("fill"), None);
    }

    #[test]
    fn canvas_translates_plot_area() {
        let mut canvas = Canvas::new(800.0, 500.0, Margin::new(50.0, 50.0, 70.0, 70.0));
        assert_eq!(canvas.inner_width(), 680.0);
        assert_eq!(canvas.inner_height(), 380.0);
        canvas
            .draw(Element::group())
            .push(Element::line(0.0, 0.0, 1.0, 1.0));

        let svg = canvas.render();
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"500\">\n"
        ));
        assert!(svg.contains("  <g transform=\"translate(70, 50)\">\n"));
        assert!(svg.contains("      <line x1=\"0\" x2=\"1\" y1=\"0\" y2=\"1\"/>\n"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn descendants_are_found() {
        let tree = Element::group()
            .child(Element::rect(0.0, 0.0, 1.0, 1.0))
            .child(Element::group().child(Element::rect(1.0, 1.0, 1.0, 1.0)));
        let mut rects = Vec::new();
        tree.descendants_by_tag("rect", &mut rects);
        assert_eq!(rects.len(), 2);
    }
}
