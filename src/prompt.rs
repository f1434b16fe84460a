//! Prompt construction for recipe generation.
//!
//! The template embeds a literal example of the JSON schema the model must
//! return; the joined ingredient list is substituted in two places, once in
//! the opening task sentence and once in the closing instruction line.

/// Split a comma-separated ingredient string into trimmed segments.
///
/// This is a literal split-and-trim: empty segments are kept, so
/// `"eggs,,milk"` yields three segments with an empty one in the middle, and
/// an all-whitespace input yields a single empty segment. Consumers of the
/// recipe endpoint rely on the prompt seeing exactly what they sent.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',').map(|part| part.trim().to_string()).collect()
}

/// Render the recipe prompt for the given ingredient list.
pub fn render_recipe_prompt(ingredients: &[String]) -> String {
    let list = ingredients.join(", ");

    format!(
        r#"You are a professional chef assistant. Your task is to generate a structured JSON object containing a detailed cooking recipe using the following ingredients: {list}.
### **Instructions:**
- Follow the exact JSON structure provided below.
- Do **NOT** include any extra text, explanations, or comments - only return a valid JSON object.
- Ensure the generated JSON is **well-formatted** and follows the exact structure.
### **Example JSON Format (Strictly Follow This):**
{{
    "recipe_name": "Delicious Dish Name",
    "servings": 4,
    "prep_time": "XX minutes",
    "cook_time": "XX minutes",
    "total_time": "XX minutes",
    "ingredients": [
        "Ingredient 1",
        "Ingredient 2",
        "Ingredient 3",
        "Ingredient 4",
        "Ingredient 5"
    ],
    "instructions": [
        {{
            "step": 1,
            "title": "Step 1 Title",
            "details": [
                "Step 1 detail line 1.",
                "Step 1 detail line 2."
            ]
        }},
        {{
            "step": 2,
            "title": "Step 2 Title",
            "details": [
                "Step 2 detail line 1.",
                "Step 2 detail line 2."
            ]
        }},
        {{
            "step": 3,
            "title": "Step 3 Title",
            "details": [
                "Step 3 detail line 1.",
                "Step 3 detail line 2."
            ]
        }},
        {{
            "step": 4,
            "title": "Step 4 Title",
            "details": [
                "Step 4 detail line 1.",
                "Step 4 detail line 2."
            ]
        }},
        {{
            "step": 5,
            "title": "Step 5 Title",
            "details": [
                "Step 5 detail line 1.",
                "Step 5 detail line 2."
            ]
        }},
        {{
            "step": 6,
            "title": "Step 6 Title",
            "details": [
                "Step 6 detail line 1.",
                "Step 6 detail line 2."
            ]
        }}
    ],
    "tips_and_variations": [
        "Tip 1: Placeholder text for a useful tip.",
        "Tip 2: Placeholder text for another tip.",
        "Tip 3: Placeholder text for a variation suggestion."
    ],
    "nutrition_info_per_serving": {{
        "calories": "XXX",
        "protein": "XXg",
        "fat": "XXg",
        "saturated_fat": "XXg",
        "cholesterol": "XXXmg",
        "sodium": "XXXmg",
        "carbohydrates": "XXg",
        "fiber": "XXg",
        "sugar": "XXg"
    }}
}}
Now, generate a JSON object for a recipe using these ingredients: {list}.
Only return a valid JSON object without any extra text."#
    )
}

/// Render the prompt for generating an image of a single cooking step.
pub fn render_step_image_prompt(title: &str) -> String {
    format!("A detailed photo illustrating this cooking step: {title}")
}
