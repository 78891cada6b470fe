//! Built-in rule tables, expressed in the dotted `Rule::from_dotted`
//! notation. Hosts normally load rules from their own configuration;
//! these tables are usable defaults and double as realistic fixtures.

pub mod python;
