use crate::model::DisplayDocument;
use anyhow::Result;

pub fn print_json(doc: &DisplayDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    println!("{}", json);
    Ok(())
}
