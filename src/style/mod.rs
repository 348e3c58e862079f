#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClassList {
    fragments: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragment(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.fragments.push(value);
        }
        self
    }

    pub fn extend(mut self, other: Self) -> Self {
        self.fragments.extend(other.fragments);
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes().any(|candidate| candidate == class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.fragments
            .iter()
            .flat_map(|fragment| fragment.split_whitespace())
    }

    pub fn len(&self) -> usize {
        self.classes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    // Hex literals belong to the token layer; class fragments must stay semantic.
    pub fn references_raw_hex(&self) -> bool {
        self.classes().any(|class| {
            class.char_indices().any(|(position, symbol)| {
                symbol == '#'
                    && class[position + 1..]
                        .chars()
                        .take(3)
                        .filter(|digit| digit.is_ascii_hexdigit())
                        .count()
                        == 3
            })
        })
    }

    pub fn join(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.join())
    }
}
