// Sensor domain model

#[derive(Debug, Clone)]
pub struct Sensor {
    pub id: String,
    pub name: String,
}

impl Sensor {
    pub fn new(id: String) -> Self {
        let name = Self::display_name(&id);
        Self { id, name }
    }

    /// Sensor ids are underscore-separated words like "ward_3_probe"; the
    /// display name capitalizes each word and drops empty ones left by
    /// doubled underscores.
    fn display_name(id: &str) -> String {
        id.split('_')
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
