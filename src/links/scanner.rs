//! Placeholder scanning for href templates
//!
//! A placeholder is a `{`, the shortest run of characters up to the next
//! `}`, and that `}`. The run cannot cross a line break. Matches never
//! overlap and keep their delimiters, so `"/a/{id}/b/{id}"` yields `{id}`
//! twice.

/// Opening placeholder delimiter
pub const LEFT_DELIM: char = '{';

/// Closing placeholder delimiter
pub const RIGHT_DELIM: char = '}';

/// Find every placeholder token in `template`, left to right
pub fn find_placeholders(template: &str) -> Vec<&str> {
    Placeholders::new(template).collect()
}

/// Iterator over the placeholder tokens of a template
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    template: &'a str,
    pos: usize,
}

impl<'a> Placeholders<'a> {
    pub fn new(template: &'a str) -> Self {
        Self { template, pos: 0 }
    }
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let start = self.pos + self.template[self.pos..].find(LEFT_DELIM)?;
            let body = &self.template[start + LEFT_DELIM.len_utf8()..];

            match body.find([RIGHT_DELIM, '\n']) {
                Some(i) if body[i..].starts_with(RIGHT_DELIM) => {
                    let end = start + LEFT_DELIM.len_utf8() + i + RIGHT_DELIM.len_utf8();
                    self.pos = end;
                    return Some(&self.template[start..end]);
                }
                // line break first: this brace opens nothing, try the next one
                Some(_) => self.pos = start + LEFT_DELIM.len_utf8(),
                None => {
                    self.pos = self.template.len();
                    return None;
                }
            }
        }
    }
}
