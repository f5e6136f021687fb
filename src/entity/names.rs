//! Syllable-template name generation

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::{Result, RogueError};
use crate::core::types::EntityKind;

const ORC_TEMPLATES: &[&str] = &["Gor{con}", "Ug{con}{vow}k", "Gri{con}{vow}kh", "Lur{con}{vow}"];
const TROLL_TEMPLATES: &[&str] = &["Ber{con}", "To{vow}{con}", "Wil{con}{vow}m", "Gna{vow}l", "Sku{vow}crusher"];
const HUMAN_TEMPLATES: &[&str] = &["Ar{vow}{con}orn", "Bor{vow}{con}ir", "Fara{vow}ir", "Eo{con}{vow}yn", "Eo{vow}{con}er"];
const WOLF_TEMPLATES: &[&str] = &["Fen{con}{vow}r", "Hat{vow}", "Sk{con}{vow}ll", "Ger{vow}", "Fr{vow}{con}i"];

const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
const VOWELS: &[u8] = b"aeiou";

fn templates_for(kind: EntityKind) -> Option<&'static [&'static str]> {
    match kind {
        EntityKind::Orc => Some(ORC_TEMPLATES),
        EntityKind::Troll => Some(TROLL_TEMPLATES),
        EntityKind::Human => Some(HUMAN_TEMPLATES),
        EntityKind::Wolf => Some(WOLF_TEMPLATES),
        _ => None,
    }
}

/// Generate a name for a creature kind.
///
/// Kinds without templates are a programming error: callers must pass an
/// explicit name for the player, items and buildings.
pub fn generate_name(kind: EntityKind, rng: &mut impl Rng) -> Result<String> {
    let template = templates_for(kind)
        .and_then(|templates| templates.choose(rng))
        .ok_or(RogueError::InvalidEntityKind(kind))?;

    let con = CONSONANTS[rng.gen_range(0..CONSONANTS.len())] as char;
    let vow = VOWELS[rng.gen_range(0..VOWELS.len())] as char;
    let name = template
        .replace("{con}", &con.to_string())
        .replace("{vow}", &vow.to_string());

    Ok(capitalize(&name))
}

/// Upper-case the first letter, lower-case the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_creature_names_have_no_placeholders() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for kind in [EntityKind::Orc, EntityKind::Troll, EntityKind::Human, EntityKind::Wolf] {
            for _ in 0..20 {
                let name = generate_name(kind, &mut rng).unwrap();
                assert!(!name.contains('{'), "{name}");
                assert!(name.chars().next().unwrap().is_uppercase());
            }
        }
    }

    #[test]
    fn test_unknown_kind_is_fatal() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for kind in [EntityKind::Player, EntityKind::Item, EntityKind::Building, EntityKind::Unknown] {
            assert!(matches!(
                generate_name(kind, &mut rng),
                Err(RogueError::InvalidEntityKind(k)) if k == kind
            ));
        }
    }

    #[test]
    fn test_same_seed_same_name() {
        let a = generate_name(EntityKind::Orc, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let b = generate_name(EntityKind::Orc, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sKUacrusher"), "Skuacrusher");
        assert_eq!(capitalize(""), "");
    }
}
