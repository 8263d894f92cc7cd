//! LLM-backed judge — structured Gemini output behind the `IntentJudge` seam.

use async_trait::async_trait;
use tracing::debug;

use super::prompts::{build_intent_prompt, INTENT_SYSTEM_PROMPT};
use super::{IntentJudge, JudgeContext, MoveInterpretation};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

pub struct LlmIntentJudge {
    client: LlmClient,
}

impl LlmIntentJudge {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IntentJudge for LlmIntentJudge {
    async fn judge(
        &self,
        input: &str,
        ctx: &JudgeContext,
    ) -> Result<MoveInterpretation, AppError> {
        let prompt = build_intent_prompt(input, ctx);
        let mut interpretation = self
            .client
            .call_json::<MoveInterpretation>(&prompt, INTENT_SYSTEM_PROMPT)
            .await
            .map_err(|e| AppError::Llm(format!("intent judgment failed: {e}")))?;

        // The model echoes raw_input unreliably; set it from the source of truth.
        interpretation.raw_input = input.to_string();

        debug!(
            classification = ?interpretation.classification,
            interpreted_move = ?interpretation.interpreted_move,
            "intent judged"
        );
        Ok(interpretation)
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}
