//! Built-in junk food menu used when no catalog file is configured.

use super::{HarmLevel, JunkCatalogItem};

struct Entry {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    harm_level: HarmLevel,
    allowed_frequency: &'static str,
    harmful: &'static [&'static str],
    beneficial: &'static [&'static str],
    reason: &'static str,
}

const MENU: &[Entry] = &[
    Entry {
        id: "shawarma_chicken",
        name: "Chicken Shawarma",
        category: "Street Food",
        harm_level: HarmLevel::MILD,
        allowed_frequency: "Once per week",
        harmful: &["Mayonnaise (high fat, refined oils)", "Refined flour wrap (maida)"],
        beneficial: &["Chicken protein"],
        reason: "Provides protein but often contains high-fat sauces and refined carbohydrates.",
    },
    Entry {
        id: "shawarma_fried",
        name: "Fried Chicken Shawarma",
        category: "Street Food",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per 2 weeks",
        harmful: &["Deep fried chicken", "Refined oil reuse", "High-fat mayonnaise"],
        beneficial: &["Protein"],
        reason: "Protein content is offset by deep frying and excessive refined fats.",
    },
    Entry {
        id: "pizza_cheese",
        name: "Cheese Pizza",
        category: "Fast Food",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per month",
        harmful: &[
            "Refined flour base (maida)",
            "High saturated fat cheese",
            "High sodium sauces",
        ],
        beneficial: &["Some protein from cheese"],
        reason: "High calorie density with refined carbs and saturated fats.",
    },
    Entry {
        id: "kfc_fried_chicken",
        name: "KFC Fried Chicken",
        category: "Fast Food",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per 2 weeks",
        harmful: &["Deep frying", "Refined vegetable oils", "High sodium breading"],
        beneficial: &["Chicken protein"],
        reason: "High protein but deep frying increases fat load and inflammation risk.",
    },
    Entry {
        id: "momos_steamed",
        name: "Steamed Momos",
        category: "Street Food",
        harm_level: HarmLevel::MILD,
        allowed_frequency: "Once per week",
        harmful: &["Refined flour outer layer"],
        beneficial: &["Steamed cooking method", "Protein filling"],
        reason: "Low fat cooking method but uses refined flour.",
    },
    Entry {
        id: "momos_fried",
        name: "Fried Momos",
        category: "Street Food",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per 2 weeks",
        harmful: &["Deep frying", "Refined oils", "Refined flour"],
        beneficial: &[],
        reason: "Combination of deep frying and refined carbohydrates.",
    },
    Entry {
        id: "biryani_chicken",
        name: "Chicken Biryani",
        category: "Restaurant Food",
        harm_level: HarmLevel::MILD,
        allowed_frequency: "Once per week",
        harmful: &["Excess oil or ghee"],
        beneficial: &["Chicken protein", "Spices with antioxidant properties"],
        reason: "Balanced meal but can be oil-heavy depending on preparation.",
    },
    Entry {
        id: "fried_rice",
        name: "Veg / Egg Fried Rice",
        category: "Restaurant Food",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per week",
        harmful: &["High oil usage", "Often palm oil", "Refined white rice"],
        beneficial: &["Some protein (egg)"],
        reason: "High glycemic load combined with excessive oil.",
    },
    Entry {
        id: "regular_coke",
        name: "Regular Coke",
        category: "Soft Drink",
        harm_level: HarmLevel::HIGH,
        allowed_frequency: "Once per month",
        harmful: &["Liquid sugar", "Phosphoric acid"],
        beneficial: &[],
        reason: "Liquid sugar causes insulin spikes and has zero satiety.",
    },
    Entry {
        id: "diet_coke",
        name: "Diet Coke",
        category: "Soft Drink",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per week",
        harmful: &["Artificial sweeteners", "Enamel erosion"],
        beneficial: &["Zero sugar"],
        reason: "No sugar but impacts dental health and appetite regulation.",
    },
    Entry {
        id: "packaged_chips",
        name: "Packaged Potato Chips",
        category: "Snacks",
        harm_level: HarmLevel::HIGH,
        allowed_frequency: "Once per month",
        harmful: &["Palm oil", "Ultra-processing", "High sodium"],
        beneficial: &[],
        reason: "Highly processed with inflammatory oils and low nutritional value.",
    },
    Entry {
        id: "namkeen",
        name: "Indian Namkeen / Mixture",
        category: "Snacks",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per 2 weeks",
        harmful: &["Deep frying", "High salt"],
        beneficial: &[],
        reason: "Less processed than chips but still oil and salt heavy.",
    },
    Entry {
        id: "ice_cream_packaged",
        name: "Packaged Ice Cream",
        category: "Dessert",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per 2 weeks",
        harmful: &["High sugar", "Saturated fats"],
        beneficial: &[],
        reason: "High sugar density with low micronutrient value.",
    },
    Entry {
        id: "kulfi",
        name: "Kulfi",
        category: "Dessert",
        harm_level: HarmLevel::MILD,
        allowed_frequency: "Once per week",
        harmful: &["Sugar"],
        beneficial: &["Milk solids"],
        reason: "Traditional dessert with fewer additives than ice cream.",
    },
    Entry {
        id: "milk_chocolate",
        name: "Milk Chocolate",
        category: "Sweets",
        harm_level: HarmLevel::MODERATE,
        allowed_frequency: "Once per week",
        harmful: &["High sugar", "Milk fats"],
        beneficial: &[],
        reason: "Sugar-heavy with limited micronutrient benefit.",
    },
    Entry {
        id: "dark_chocolate",
        name: "Dark Chocolate (70%+)",
        category: "Sweets",
        harm_level: HarmLevel::MILD,
        allowed_frequency: "2-3 per week",
        harmful: &["Some sugar"],
        beneficial: &["Polyphenols", "Lower sugar content"],
        reason: "Lower sugar and contains antioxidants when consumed in small portions.",
    },
    Entry {
        id: "idli_dosa",
        name: "Idli / Plain Dosa",
        category: "South Indian",
        harm_level: HarmLevel::LEAST,
        allowed_frequency: "Unlimited",
        harmful: &[],
        beneficial: &["Fermented batter", "Low fat"],
        reason: "Fermented, easy to digest, and low in harmful components.",
    },
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub(super) fn junk_menu() -> Vec<JunkCatalogItem> {
    MENU.iter()
        .map(|entry| JunkCatalogItem {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            category: entry.category.to_string(),
            harm_level: entry.harm_level,
            allowed_frequency: Some(entry.allowed_frequency.to_string()),
            harmful_components: owned(entry.harmful),
            beneficial_components: owned(entry.beneficial),
            reason: Some(entry.reason.to_string()),
        })
        .collect()
}
