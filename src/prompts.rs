//! Canned conversational text: starters, fallbacks and the disclaimer.

/// Welcome messages, one chosen at random per conversation start.
pub const CONVERSATION_STARTERS: [&str; 3] = [
    "Hi! I'm NutriBot, your personal nutrition coach. How can I help you with your diet and nutrition goals today?",
    "Hello! Ready to talk about nutrition? I'm here to help with meal planning, calorie guidance, or any diet questions you have.",
    "Welcome! I'm your nutrition advisor. Whether you want to lose weight, gain muscle, or just eat healthier, I'm here to guide you.",
];

/// Deterministic fillers used when no expert handler applies and the
/// generative collaborator is unavailable.
pub const FALLBACK_RESPONSES: [&str; 5] = [
    "That's a great nutrition question! Could you provide more details so I can give you the best advice?",
    "I'm here to help with your nutrition goals. What specific aspect would you like to focus on?",
    "Thanks for your question! To give you personalized advice, could you share more about your current situation?",
    "I'd love to help you with that! Could you tell me more about your dietary preferences or goals?",
    "That's an interesting nutrition topic. What would you like to know specifically?",
];

/// Fixed redirect for messages that fail input validation.
pub const REDIRECT_MESSAGE: &str = "I'm here to help with nutrition and diet questions. \
Could you please ask me something about food, nutrition, or healthy eating?";

/// Appended to responses on medically adjacent topics.
pub const DISCLAIMER_TEXT: &str = "⚠️ This advice is for general information only and should \
not replace professional medical guidance. Please consult with healthcare providers for \
personalized medical advice.";

/// Sample queries surfaced by front ends.
pub const EXAMPLE_PROMPTS: [&str; 8] = [
    "How many calories should I eat to lose 1 pound per week?",
    "What's a good high-protein breakfast for vegetarians?",
    "Can you suggest a meal plan for someone trying to gain muscle?",
    "What foods are rich in iron for someone with anemia?",
    "How do I calculate my daily protein needs?",
    "What's a healthy snack for someone with diabetes?",
    "Can you help me plan meals for a ketogenic diet?",
    "What are some good sources of omega-3 fatty acids?",
];
