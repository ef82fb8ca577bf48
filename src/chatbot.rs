//! Dialogue orchestration.
//!
//! Drives one turn end to end: validate, extract + merge, classify, then
//! either continue an in-progress profile interview or dispatch to the
//! templated handler for the detected intent. All user-visible failure
//! modes degrade to polite, on-topic messages - callers never see a raw
//! error.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::brain::{QueryAnalysis, QueryAnalyzer, QueryType};
use crate::calculator::{calculate_daily_needs, DailyNeeds, DailyNeedsOutcome};
use crate::error::AppError;
use crate::meals::{suggest_meals, MealType};
use crate::models::{ConversationTurn, Role, UserProfile};
use crate::nutrition_data::nutrient_sources;
use crate::profile_store::ProfileStore;
use crate::prompts::{CONVERSATION_STARTERS, FALLBACK_RESPONSES, REDIRECT_MESSAGE};

/// Minimum trimmed message length accepted for processing.
const MIN_MESSAGE_LEN: usize = 3;

/// Medical terms the bot refuses to engage with.
const DISALLOWED_TERMS: [&str; 6] = [
    "medication",
    "drug",
    "prescription",
    "diagnose",
    "cure",
    "treat",
];

/// Phrases marking an assistant turn as a request for profile details.
/// Shared between the templates that emit them and the detection that
/// reads them back, so the interview flow cannot drift out of sync.
const INTERVIEW_PHRASES: [&str; 4] = ["i need", "please share", "what's your", "tell me about"];

/// Nutrients the nutrient-advice handler knows how to look up.
const KNOWN_NUTRIENTS: [&str; 8] = [
    "vitamin c",
    "vitamin d",
    "vitamin b12",
    "iron",
    "calcium",
    "omega 3",
    "fiber",
    "potassium",
];

/// Optional generative collaborator for small talk the rule engine cannot
/// answer. Absence or failure must never surface to the user.
pub trait ResponseGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Main chatbot combining the brain analysis pipeline with nutrition
/// expertise. The profile store is injected so tests and embedders can
/// share or swap it.
pub struct DietChatbot {
    store: Arc<ProfileStore>,
    analyzer: QueryAnalyzer,
    generator: Option<Box<dyn ResponseGenerator>>,
}

impl DietChatbot {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self {
            store,
            analyzer: QueryAnalyzer::new(),
            generator: None,
        }
    }

    /// Attach a generative collaborator for the conversational fallback.
    pub fn with_generator(mut self, generator: Box<dyn ResponseGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// A random welcome message to start the conversation.
    pub fn welcome_message(&self) -> String {
        CONVERSATION_STARTERS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(CONVERSATION_STARTERS[0])
            .to_string()
    }

    /// Process one user message. Returns the response text and whether it
    /// should carry the medical disclaimer. Never fails for valid string
    /// input; invalid input yields the fixed redirect with no disclaimer.
    pub fn process_message(&self, message: &str, user_id: &str) -> (String, bool) {
        if !validate_user_input(message) {
            info!(user_id, "message rejected by input validation");
            return (REDIRECT_MESSAGE.to_string(), false);
        }

        // The interview check reads the assistant turn that preceded this
        // message, so capture it before recording anything new.
        let previous_assistant = self.store.last_assistant_turn(user_id);

        self.store
            .push_turn(user_id, ConversationTurn::new(Role::User, message));

        let analysis = self.analyzer.analyze(message, &self.store, user_id);

        let mid_interview = previous_assistant
            .as_deref()
            .is_some_and(is_interview_prompt);

        let response = if mid_interview {
            // The user is answering our questions: try the calculation now,
            // whatever this message classified as.
            self.continue_interview(&analysis.profile)
        } else {
            self.dispatch(&analysis)
        };

        self.store
            .push_turn(user_id, ConversationTurn::new(Role::Assistant, &response));

        (response, analysis.query_type.needs_disclaimer())
    }

    /// Drop all state for a user. The next message starts a fresh
    /// conversation with an empty profile.
    pub fn reset_conversation(&self, user_id: &str) {
        self.store.reset(user_id);
    }

    /// Mid-interview step: deliver the full plan if the profile is now
    /// complete, otherwise ask for exactly what is still missing.
    fn continue_interview(&self, profile: &UserProfile) -> String {
        match calculate_daily_needs(profile) {
            DailyNeedsOutcome::Ready(needs) => format_complete_advice(&needs),
            DailyNeedsOutcome::Incomplete { .. } => ask_for_missing_info(profile),
        }
    }

    /// Exhaustive dispatch on the classified intent.
    fn dispatch(&self, analysis: &QueryAnalysis) -> String {
        let profile = &analysis.profile;
        match analysis.query_type {
            QueryType::CalorieCalculation => self.handle_calorie_query(profile),
            QueryType::MacroAdvice => self.handle_macro_query(profile),
            QueryType::MealPlanning => self.handle_meal_planning(&analysis.query, profile),
            QueryType::NutrientAdvice => self.handle_nutrient_query(&analysis.query),
            QueryType::WeightLoss | QueryType::WeightGain => {
                self.handle_weight_goal_query(analysis.query_type, profile)
            }
            QueryType::RecipeAdvice => self.handle_recipe_query(),
            QueryType::GeneralNutrition => self.handle_conversational(&analysis.query),
        }
    }

    fn handle_calorie_query(&self, profile: &UserProfile) -> String {
        match calculate_daily_needs(profile) {
            DailyNeedsOutcome::Ready(needs) => format!(
                "Based on your profile, here are your daily needs:\n\n{}",
                format_needs_block(&needs)
            ),
            DailyNeedsOutcome::Incomplete { .. } => request_profile_details(),
        }
    }

    fn handle_macro_query(&self, profile: &UserProfile) -> String {
        match calculate_daily_needs(profile) {
            DailyNeedsOutcome::Ready(needs) => format!(
                "Here's your daily macronutrient breakdown:\n\n\
                 🥩 **Protein: {}g**\n\
                 • Builds and repairs muscle tissue\n\
                 • Aim for 20-30g per meal\n\
                 • Good sources: chicken, fish, eggs, beans, yogurt\n\n\
                 🍞 **Carbohydrates: {}g**\n\
                 • Primary energy source for your body\n\
                 • Focus on complex carbs (oats, quinoa, sweet potato)\n\
                 • Time around workouts for best utilization\n\n\
                 🥑 **Fats: {}g**\n\
                 • Essential for hormone production and nutrient absorption\n\
                 • Include healthy fats: nuts, olive oil, avocado, fatty fish\n\n\
                 💡 **Pro tip**: Don't stress about hitting exact numbers daily - \
                 focus on weekly averages and listen to your body!",
                needs.macros.protein_g.round(),
                needs.macros.carbs_g.round(),
                needs.macros.fat_g.round()
            ),
            DailyNeedsOutcome::Incomplete { .. } => {
                "To give you personalized macro recommendations, please share:\n\n\
                 📝 Your age, weight, height, and gender\n\
                 🏃 Your activity level\n\
                 🎯 Your specific goals (lose weight, gain muscle, maintain)\n\n\
                 Generally, a balanced approach includes:\n\
                 • **Protein**: 0.8-1.2g per lb bodyweight\n\
                 • **Carbs**: 45-65% of total calories\n\
                 • **Fat**: 20-35% of total calories"
                    .to_string()
            }
        }
    }

    fn handle_meal_planning(&self, message: &str, profile: &UserProfile) -> String {
        let meal_type = MealType::from_message(message);
        let suggestions = suggest_meals(profile.dietary_restriction.as_deref(), meal_type);

        if suggestions.is_empty() {
            return "I'd love to help with meal planning! Could you tell me about any \
                    dietary restrictions or preferences you have?"
                .to_string();
        }

        let mut response = format!("🍽️ **Meal Suggestions for {}:**\n\n", meal_type.title());
        for (i, suggestion) in suggestions.iter().enumerate() {
            response.push_str(&format!(
                "**{}. {}**\n• Ingredients: {}\n• {}\n• Prep time: {}\n\n",
                i + 1,
                suggestion.meal,
                suggestion.ingredients.join(", "),
                suggestion.description,
                suggestion.prep_time
            ));
        }
        response.push_str(
            "💡 **Tip**: Prepare ingredients in advance for quicker meal assembly during busy days!",
        );
        response
    }

    fn handle_nutrient_query(&self, message: &str) -> String {
        let message = message.to_lowercase();
        let found = KNOWN_NUTRIENTS
            .iter()
            .find(|nutrient| message.contains(*nutrient));

        if let Some(nutrient) = found {
            let sources = nutrient_sources(nutrient);
            if !sources.is_empty() {
                let list: Vec<String> = sources.iter().map(|s| format!("• {}", s)).collect();
                return format!(
                    "🌟 **Great sources of {}:**\n\n{}\n\n💡 **Tip**: Try to get nutrients \
                     from whole foods when possible - they're better absorbed than supplements!",
                    title_case(nutrient),
                    list.join("\n")
                );
            }
            return format!(
                "I'd be happy to help with {} information! Could you be more specific \
                 about what you'd like to know?",
                nutrient
            );
        }

        "I can help you learn about various nutrients! Some popular ones include:\n\n\
         🌟 **Vitamins**: C, D, B12\n\
         ⚡ **Minerals**: Iron, Calcium, Potassium\n\
         🐟 **Essential Fats**: Omega-3 fatty acids\n\
         🌾 **Fiber**: For digestive health\n\n\
         What specific nutrient would you like to know more about?"
            .to_string()
    }

    fn handle_weight_goal_query(&self, query_type: QueryType, profile: &UserProfile) -> String {
        if let DailyNeedsOutcome::Ready(needs) = calculate_daily_needs(profile) {
            return format_complete_advice(&needs);
        }

        let advice = if query_type == QueryType::WeightLoss {
            "For healthy weight loss, aim for:\n\n\
             🎯 **Safe Rate**: 1-2 pounds per week\n\
             📉 **Calorie Deficit**: 500-750 calories below maintenance\n\
             🍽️ **Focus On**:\n\
             • High protein to preserve muscle (0.8-1g per lb bodyweight)\n\
             • Plenty of vegetables for nutrients and satiety\n\
             • Stay hydrated (half your bodyweight in ounces of water)\n\
             • Consistent meal timing\n\n\
             ⚠️ Avoid extreme restrictions - sustainable habits lead to lasting results!"
        } else {
            "For healthy weight gain, consider:\n\n\
             🎯 **Safe Rate**: 0.5-1 pound per week\n\
             📈 **Calorie Surplus**: 300-500 calories above maintenance\n\
             🏋️ **Focus On**:\n\
             • Adequate protein for muscle building (1-1.2g per lb bodyweight)\n\
             • Complex carbs around workouts\n\
             • Healthy fats for hormone production\n\
             • Consistent strength training\n\n\
             💡 Quality over quantity - choose nutrient-dense foods!"
        };

        format!(
            "{}\n\nTo put exact numbers on this, please share your age, weight, height, \
             gender, and activity level.",
            advice
        )
    }

    fn handle_recipe_query(&self) -> String {
        "🍳 **Healthy Cooking Tips:**\n\n\
         **Quick & Nutritious Ideas:**\n\
         • **Protein + Veggie Bowl**: Any lean protein with roasted vegetables\n\
         • **Smoothie**: Protein powder, spinach, berries, almond milk\n\
         • **Egg Scramble**: Eggs with whatever vegetables you have on hand\n\n\
         **Cooking Methods for Health:**\n\
         • Baking, grilling, or steaming instead of frying\n\
         • Use herbs and spices instead of excess salt\n\
         • Meal prep 2-3 dishes on Sunday for the week\n\n\
         **Smart Substitutions:**\n\
         • Greek yogurt instead of sour cream\n\
         • Cauliflower rice instead of regular rice\n\
         • Zucchini noodles for pasta\n\n\
         What type of dish or cooking method would you like specific guidance on?"
            .to_string()
    }

    /// Conversational fallback: the generative collaborator when present
    /// and healthy, a deterministic filler otherwise.
    fn handle_conversational(&self, message: &str) -> String {
        if let Some(generator) = &self.generator {
            match generator.generate(message) {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "response generator failed, using fallback");
                }
            }
        }

        FALLBACK_RESPONSES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(FALLBACK_RESPONSES[0])
            .to_string()
    }
}

/// Basic screening: long enough and free of disallowed medical terms.
fn validate_user_input(text: &str) -> bool {
    if text.trim().chars().count() < MIN_MESSAGE_LEN {
        return false;
    }

    let text = text.to_lowercase();
    !DISALLOWED_TERMS.iter().any(|term| text.contains(term))
}

/// Whether an assistant message was a request for profile details.
fn is_interview_prompt(text: &str) -> bool {
    let text = text.to_lowercase();
    INTERVIEW_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Shared stats-request template for handlers that need a full profile.
fn request_profile_details() -> String {
    "I'm here to help with your nutrition goals! For personalized advice, please share:\n\n\
     📏 **Your Stats**: Age, weight, height, gender\n\
     🏃 **Activity Level**: Sedentary to very active\n\
     🎯 **Goals**: Weight loss, gain, or maintenance\n\
     🚫 **Restrictions**: Any dietary limitations or allergies\n\n\
     The more details you provide, the better I can tailor my recommendations to your needs!"
        .to_string()
}

/// Follow-up naming exactly the fields still missing, in the fixed order
/// age, weight, height, gender, activity level, and listing what is
/// already known.
fn ask_for_missing_info(profile: &UserProfile) -> String {
    let mut have = Vec::new();
    let mut need = Vec::new();

    match profile.age {
        Some(age) => have.push(format!("Age: {}", age)),
        None => need.push("age"),
    }
    match profile.weight_kg {
        Some(weight) => have.push(format!("Weight: {:.0} kg", weight)),
        None => need.push("weight"),
    }
    match profile.height_cm {
        Some(height) => have.push(format!("Height: {:.0} cm", height)),
        None => need.push("height"),
    }
    match profile.gender {
        Some(gender) => have.push(format!("Gender: {}", gender)),
        None => need.push("gender"),
    }
    match profile.activity {
        Some(activity) => have.push(format!("Activity: {}", activity)),
        None => need.push("activity level"),
    }

    // Everything but the goal is known; ask for it directly. The wording
    // keeps an interview phrase so the next answer is picked up too.
    let Some(first_needed) = need.first().copied() else {
        return "Great, I have all your stats! Now tell me about your goal - are you \
                looking to lose weight, gain weight, or maintain your current weight?"
            .to_string();
    };

    let mut response = if have.is_empty() {
        "I'm gathering your information.".to_string()
    } else {
        format!("Thanks! I have: {}", have.join(", "))
    };
    response.push_str(&format!(
        "\n\n🤔 I still need your **{}** to calculate your personalized nutrition plan.",
        need.join(" and ")
    ));
    response.push_str(&format!("\n\nWhat's your {}?", first_needed));
    response
}

/// The recurring calories + macros + BMR/TDEE block. The only place these
/// numbers get rounded.
fn format_needs_block(needs: &DailyNeeds) -> String {
    format!(
        "🔥 **Daily Calories**: {} calories\n\
         📊 **Macronutrient Breakdown**:\n\
         • Protein: {}g ({}%)\n\
         • Carbs: {}g ({}%)\n\
         • Fat: {}g ({}%)\n\n\
         💡 **Your Numbers**:\n\
         • BMR (at rest): {} calories\n\
         • TDEE (with activity): {} calories",
        needs.target_calories.round(),
        needs.macros.protein_g.round(),
        (needs.ratio.protein * 100.0).round(),
        needs.macros.carbs_g.round(),
        (needs.ratio.carbs * 100.0).round(),
        needs.macros.fat_g.round(),
        (needs.ratio.fat * 100.0).round(),
        needs.bmr.round(),
        needs.tdee.round()
    )
}

/// Full advice delivered once the profile interview completes.
fn format_complete_advice(needs: &DailyNeeds) -> String {
    format!(
        "Perfect! Based on your information, here's your personalized nutrition plan:\n\n\
         {}\n\n\
         🎯 **Next Steps**: Would you like meal suggestions, specific recipes, or have \
         questions about these numbers?",
        format_needs_block(needs)
    )
}

/// Title-case a nutrient name for display ("vitamin b12" -> "Vitamin B12").
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
