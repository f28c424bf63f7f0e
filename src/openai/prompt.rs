// Fixed description prompt and request construction
// Author: kelexine (https://github.com/kelexine)

use super::{DESCRIPTION_MODEL, MAX_COMPLETION_TOKENS};
use crate::models::openai::{ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl};
use base64::Engine;

/// Instruction sent alongside every image.
pub const DESCRIPTION_PROMPT: &str = "\
Describe the image with the highest level of detail possible. Start by identifying the type of image (e.g., meme, photo, painting, social media post) and its overall theme and purpose. Then, provide details for the following categories:
Primary Focus: Describe the main subjects or focal points.
Context and Setting: Outline the general environment or background, including time and place if relevant.
Composition and Layout: Explain the arrangement of elements, balance, symmetry, perspective, and use of space.
Color and Tone: Describe the dominant colors, overall color scheme, and mood conveyed by the colors.
Text and Typography (if applicable): Detail the presence of text, font style, size, placement, and relationship with visual elements.
Actions and Interactions: Describe activities or movements depicted and interactions between subjects or elements.
Emotions and Expressions: Provide details on the emotional tone, facial expressions, and body language of subjects.
Details and Accessories: Note any notable details or accessories like clothing, objects, symbols, or icons.
Medium and Style: Indicate the medium used and artistic style or technique.
Cultural and Historical Context: Mention any cultural or historical references and their relevance.
Popular Media: If the image contains any sort of popular media, please try to identify it. I.e. if it is from a TV show or movie, please try to guess which media it is from. If you cannot output this, describe it generally so it could be identified by a savvy person.
For people within the image, describe their physical appearance without naming specific individuals:
Physical Appearance: Gender, age, ethnicity, height, build, posture, hair color, style, length, eye color, shape, facial features.
Attire and Accessories: Clothing type, style, color, footwear, accessories, unique or notable items.
Behavior and Actions: Specific actions or activities, interaction with other people or objects, gestures, and movements.
Expressions and Emotions: Facial expressions, overall demeanor, and mood.
Do not repeat yourself when describing these aspects. If one or more are already covered, do not spend more time writing about it.
Write in markdown, and be exhaustively descriptive and ultra verbose. If the sections are not relevant, simply do not output them. Never forcibly output a section if it's not entirely relevant.
";

/// Wrap raw image bytes in a base64 `data:` URI.
///
/// The declared MIME type is always `image/jpeg`, PNG payloads included.
pub fn image_data_uri(image: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(image);
    format!("data:image/jpeg;base64,{}", encoded)
}

/// Build the chat completions body for one image.
pub fn build_request(image: &[u8]) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: DESCRIPTION_MODEL.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::Text {
                    text: DESCRIPTION_PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_data_uri(image),
                        detail: Some("high".to_string()),
                    },
                },
            ],
        }],
        max_tokens: MAX_COMPLETION_TOKENS,
    }
}
