//! Snapshot export: JSON backups and a Cypher DUMP.
//!
//! JSON is the seed/backup format and round-trips through [`import_json`].
//! The Cypher script loads the tree into any Neo4j-compatible database:
//!
//! ```text
//! Snapshot → export_cypher_dump() → CREATE (:Member {...}) + [:PARENT]/[:SPOUSE]
//!   → paste into Neo4j Browser, or pipe into cypher-shell
//! ```

use std::io::{Read, Write};

use crate::model::*;
use crate::Result;

// ============================================================================
// JSON
// ============================================================================

/// Write a snapshot as pretty-printed JSON.
pub fn export_json(snapshot: &Snapshot, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, snapshot)?;
    writeln!(writer)?;
    Ok(())
}

/// Read a snapshot written by [`export_json`].
///
/// Relations with an unrecognized `type` load as [`RelationType::Unknown`];
/// the index ignores them.
pub fn import_json(reader: &mut dyn Read) -> Result<Snapshot> {
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    tracing::debug!(
        members = snapshot.members.len(),
        relations = snapshot.relations.len(),
        "snapshot imported"
    );
    Ok(snapshot)
}

// ============================================================================
// Cypher DUMP
// ============================================================================

/// Export a snapshot as a Cypher DUMP script.
///
/// One `CREATE` per member, then one `MATCH ... CREATE` per PARENT/SPOUSE
/// relation. Relations of unknown type are skipped.
pub fn export_cypher_dump(snapshot: &Snapshot, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "// kinship Cypher DUMP")?;
    writeln!(writer, "// Members: {}", snapshot.members.len())?;
    writeln!(writer, "// Relations: {}", snapshot.relations.len())?;
    writeln!(writer)?;

    for member in &snapshot.members {
        writeln!(writer, "CREATE (:Member {{{}}});", format_member(member))?;
    }

    writeln!(writer)?;
    writeln!(writer, "// Relations")?;

    for rel in &snapshot.relations {
        if rel.rel_type == RelationType::Unknown {
            continue;
        }
        writeln!(
            writer,
            "MATCH (a:Member {{_id: {}}}), (b:Member {{_id: {}}}) CREATE (a)-[:{} {{_id: {}}}]->(b);",
            rel.from_id.0,
            rel.to_id.0,
            rel.rel_type,
            rel.id.0,
        )?;
    }

    Ok(())
}

/// Member fields as a Cypher property list. Absent optionals are omitted.
fn format_member(member: &Member) -> String {
    let gender = match member.gender {
        Gender::Male => "MALE",
        Gender::Female => "FEMALE",
    };
    let mut parts = vec![
        format!("_id: {}", member.id.0),
        format!("name: {}", quote(&member.name)),
        format!("gender: {}", quote(gender)),
        format!("generation: {}", member.generation),
    ];
    if let Some(date) = member.birth_date {
        parts.push(format!("birth_date: date({})", quote(&date.to_string())));
    }
    let optional = [
        ("address", &member.address),
        ("phone", &member.phone),
        ("photo_uri", &member.photo_uri),
    ];
    for (key, value) in optional {
        if let Some(v) = value {
            parts.push(format!("{}: {}", key, quote(v)));
        }
    }
    parts.join(", ")
}

/// Single-quoted Cypher string literal.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}
