/// POM parsing adapter - turns raw pom.xml content into domain models.
mod parser;

pub use parser::parse_pom;
