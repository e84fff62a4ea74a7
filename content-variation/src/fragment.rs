/// Template rendered against a city name.
pub type CityTemplate = fn(&str) -> String;

/// Template rendered against a city name and a service name, in that order.
pub type CityServiceTemplate = fn(&str, &str) -> String;

/// One candidate unit of copy: either fixed text or a template that names the entity the
/// page is about, so a single pool entry can be reused across many cities.
#[derive(Clone, Copy)]
pub enum Fragment<T = CityTemplate> {
    Literal(&'static str),
    Template(T),
}

impl Fragment<CityTemplate> {
    pub fn render(&self, city: &str) -> String {
        match self {
            Fragment::Literal(text) => (*text).to_string(),
            Fragment::Template(template) => template(city),
        }
    }
}

impl Fragment<CityServiceTemplate> {
    pub fn render(&self, city: &str, service: &str) -> String {
        match self {
            Fragment::Literal(text) => (*text).to_string(),
            Fragment::Template(template) => template(city, service),
        }
    }
}

impl<T> std::fmt::Debug for Fragment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fragment::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Fragment::Template(_) => f.write_str("Template(..)"),
        }
    }
}
