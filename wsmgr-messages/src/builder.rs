use std::collections::HashMap;

pub struct MessageBuilder {
    template: &'static str,
    vars: HashMap<&'static str, String>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: HashMap::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.insert(key, value.into());
        self
    }

    /// Fill `{key}` placeholders in one left-to-right pass over the template.
    ///
    /// Substituted values are never scanned again, so a value that itself
    /// looks like a placeholder comes out as written.
    pub fn build(self) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template;
        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => match self.vars.get(&after[..close]) {
                    Some(value) => {
                        result.push_str(value);
                        rest = &after[close + 1..];
                    }
                    None => {
                        result.push('{');
                        rest = after;
                    }
                },
                None => {
                    result.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        result.push_str(rest);
        result
    }
}
