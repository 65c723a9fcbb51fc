//! `data-model.md` parser.

use super::is_blank;
use crate::markdown::{extract_block, extract_bullets, headed_blocks};
use crate::model::{DataModelDoc, EntityDescriptor};

/// Parse the data model: `###` entities under `## Entities` and bullet
/// relationships under `## Relationships`.
pub fn parse(markdown: &str) -> Option<DataModelDoc> {
    if is_blank(markdown) {
        return None;
    }

    let entities: Vec<EntityDescriptor> = headed_blocks(extract_block(markdown, "Entities", 2), 3)
        .into_iter()
        .filter(|b| !b.heading.is_empty())
        .map(|b| EntityDescriptor {
            name: b.heading.to_string(),
            description: b.body.trim().to_string(),
        })
        .collect();
    let relationships = extract_bullets(extract_block(markdown, "Relationships", 2));

    if entities.is_empty() && relationships.is_empty() {
        return None;
    }

    Some(DataModelDoc {
        entities,
        relationships,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entities_and_relationships() {
        let md = r#"# Data Model

## Entities

### Customer
A person or company that buys.

### Invoice
A bill sent to a customer.

## Relationships
- Customer has many Invoices
- Invoice belongs to Customer
"#;
        let doc = parse(md).unwrap();
        assert_eq!(
            doc.entities,
            vec![
                EntityDescriptor {
                    name: "Customer".into(),
                    description: "A person or company that buys.".into(),
                },
                EntityDescriptor {
                    name: "Invoice".into(),
                    description: "A bill sent to a customer.".into(),
                },
            ]
        );
        assert_eq!(
            doc.relationships,
            vec!["Customer has many Invoices", "Invoice belongs to Customer"]
        );
    }

    #[test]
    fn entities_outside_block_are_ignored() {
        let md = "### Stray\ntext\n## Relationships\n- A to B\n";
        let doc = parse(md).unwrap();
        assert!(doc.entities.is_empty());
        assert_eq!(doc.relationships, vec!["A to B"]);
    }

    #[test]
    fn entity_with_empty_description_is_kept() {
        let doc = parse("## Entities\n### Tag\n").unwrap();
        assert_eq!(doc.entities[0].name, "Tag");
        assert_eq!(doc.entities[0].description, "");
    }

    #[test]
    fn empty_blocks_are_absent() {
        assert_eq!(parse("## Entities\nprose only\n## Relationships\n"), None);
    }
}
