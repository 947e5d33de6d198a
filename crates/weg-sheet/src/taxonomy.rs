//! The closed WEG skill taxonomy.
//!
//! Skills are grouped by governing attribute. Force powers form a separate
//! set: they are accepted as skills on a sheet but have no governing
//! attribute. The alias table maps common spellings onto canonical names.

use std::sync::LazyLock;

use weg_core::Attribute;

use crate::normalize::collapse_separators;

const DEXTERITY_SKILLS: &[&str] = &[
    "blaster",
    "brawling_parry",
    "dodge",
    "firearms",
    "lightsaber",
    "melee_combat",
    "melee_parry",
    "pick_pocket",
    "running",
    "thrown_weapons",
    "vehicle_blasters",
    "archaic_guns",
    "blaster_artillery",
    "bowcaster",
    "grenade",
    "heavy_weapons",
];

const KNOWLEDGE_SKILLS: &[&str] = &[
    "alien_species",
    "bureaucracy",
    "cultures",
    "intimidation",
    "languages",
    "planetary_systems",
    "scholar",
    "streetwise",
    "survival",
    "tactics",
    "technology",
    "willpower",
    "business",
    "law_enforcement",
    "value",
    "jedi_lore",
    "sith_lore",
];

const MECHANICAL_SKILLS: &[&str] = &[
    "astrogation",
    "beast_riding",
    "communications",
    "computer_programming",
    "piloting",
    "repulsorlift_operation",
    "sensors",
    "space_transports",
    "starfighter_piloting",
    "starship_gunnery",
    "starship_shields",
    "swoop_operation",
    "walker_operation",
    "capital_ship_piloting",
    "capital_ship_gunnery",
    "capital_ship_shields",
];

const PERCEPTION_SKILLS: &[&str] = &[
    "bargain",
    "command",
    "con",
    "forgery",
    "gambling",
    "hide",
    "investigation",
    "persuasion",
    "search",
    "sneak",
    "artist",
    "entertain",
    "sleight_of_hand",
];

const STRENGTH_SKILLS: &[&str] = &[
    "brawling", "climbing", "jumping", "lifting", "stamina", "swimming",
];

const TECHNICAL_SKILLS: &[&str] = &[
    "armor_repair",
    "blaster_repair",
    "computer_repair",
    "demolitions",
    "droid_programming",
    "droid_repair",
    "first_aid",
    "lightsaber_repair",
    "medicine",
    "repulsorlift_repair",
    "security",
    "space_transports_repair",
    "starfighter_repair",
    "capital_ship_repair",
    "walker_repair",
];

const FORCE_POWERS: &[&str] = &[
    "accelerate_healing",
    "absorb_dissipate_energy",
    "concentration",
    "control_pain",
    "detoxify_poison",
    "enhance_attribute",
    "hibernation_trance",
    "reduce_injury",
    "remain_conscious",
    "resist_stun",
    "combat_sense",
    "danger_sense",
    "life_detection",
    "life_sense",
    "magnify_senses",
    "receptive_telepathy",
    "sense_force",
    "telekinesis",
    "lightsaber_combat",
    "projective_telepathy",
    "affect_mind",
    "control_mind",
    "transfer_force",
];

// `repair` has no single canonical target; it maps to blaster_repair.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("lightsabre", "lightsaber"),
    ("light_saber", "lightsaber"),
    ("light_sabre", "lightsaber"),
    ("melee", "melee_combat"),
    ("brawl", "brawling"),
    ("pilot", "piloting"),
    ("astro", "astrogation"),
    ("computer", "computer_programming"),
    ("repair", "blaster_repair"),
];

static STANDARD: LazyLock<SkillTaxonomy> = LazyLock::new(|| {
    SkillTaxonomy::new()
        .with_skills(Attribute::Dexterity, DEXTERITY_SKILLS)
        .with_skills(Attribute::Knowledge, KNOWLEDGE_SKILLS)
        .with_skills(Attribute::Mechanical, MECHANICAL_SKILLS)
        .with_skills(Attribute::Perception, PERCEPTION_SKILLS)
        .with_skills(Attribute::Strength, STRENGTH_SKILLS)
        .with_skills(Attribute::Technical, TECHNICAL_SKILLS)
        .with_force_powers(FORCE_POWERS)
        .with_aliases(SKILL_ALIASES)
});

/// A mapping from attributes to the skills they govern, plus Force powers
/// and spelling aliases.
#[derive(Debug, Clone, Default)]
pub struct SkillTaxonomy {
    categories: Vec<(Attribute, Vec<String>)>,
    force_powers: Vec<String>,
    aliases: Vec<(String, String)>,
}

impl SkillTaxonomy {
    /// Create an empty taxonomy. Useful for tests with a reduced skill list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in WEG Star Wars taxonomy.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Add skills governed by `attribute`.
    pub fn with_skills(mut self, attribute: Attribute, skills: &[&str]) -> Self {
        let skills = skills.iter().map(|s| s.to_string());
        match self.categories.iter_mut().find(|(a, _)| *a == attribute) {
            Some((_, existing)) => existing.extend(skills),
            None => self.categories.push((attribute, skills.collect())),
        }
        self
    }

    /// Add Force power names.
    pub fn with_force_powers(mut self, powers: &[&str]) -> Self {
        self.force_powers
            .extend(powers.iter().map(|s| s.to_string()));
        self
    }

    /// Add `(spelling, canonical)` alias pairs.
    pub fn with_aliases(mut self, aliases: &[(&str, &str)]) -> Self {
        self.aliases.extend(
            aliases
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string())),
        );
        self
    }

    /// Normalize a raw skill name: lowercase, separators collapsed to `_`,
    /// then the alias table applied.
    pub fn normalize_skill(&self, raw: &str) -> String {
        let collapsed = collapse_separators(raw);
        self.aliases
            .iter()
            .find(|(from, _)| *from == collapsed)
            .map(|(_, to)| to.clone())
            .unwrap_or(collapsed)
    }

    /// Returns true if the already-normalized name is a skill or Force power.
    pub fn is_recognized(&self, skill: &str) -> bool {
        self.categories
            .iter()
            .any(|(_, skills)| skills.iter().any(|s| s == skill))
            || self.force_powers.iter().any(|p| p == skill)
    }

    /// Returns true if the already-normalized name is a Force power.
    pub fn is_force_power(&self, skill: &str) -> bool {
        self.force_powers.iter().any(|p| p == skill)
    }

    /// The attribute governing a skill, after normalizing both the query
    /// and every taxonomy entry the same way.
    pub fn attribute_for_skill(&self, skill: &str) -> Option<Attribute> {
        let wanted = self.normalize_skill(skill);
        self.categories
            .iter()
            .find(|(_, skills)| skills.iter().any(|s| self.normalize_skill(s) == wanted))
            .map(|(attribute, _)| *attribute)
    }

    /// Skills governed by `attribute`.
    pub fn skills_for(&self, attribute: Attribute) -> &[String] {
        self.categories
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, skills)| skills.as_slice())
            .unwrap_or(&[])
    }

    /// All Force power names.
    pub fn force_powers(&self) -> &[String] {
        &self.force_powers
    }
}

/// Normalize a skill name with the standard taxonomy's alias table.
pub fn normalize_skill(raw: &str) -> String {
    SkillTaxonomy::standard().normalize_skill(raw)
}

/// The governing attribute of a skill in the standard taxonomy.
pub fn attribute_for_skill(skill: &str) -> Option<Attribute> {
    SkillTaxonomy::standard().attribute_for_skill(skill)
}
