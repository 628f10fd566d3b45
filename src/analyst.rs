//! Composes the fixed analysis prompt with caller questions and delegates
//! to the DeepSeek client.

use thiserror::Error;

use crate::llm::{ChatError, DeepSeekClient, Message, Role};

/// System prompt establishing the data-analyst persona and the two-section
/// output contract. Downstream consumers split the response on the literal
/// `【【【【【` markers, so this text must stay byte-for-byte stable.
const SYSTEM_PROMPT: &str = "你是一个数据分析师和前端开发专家，接下来我会按照以下固定格式给你提供内容：\n\
分析需求：\n\
{数据分析的需求或者目标}\n\
原始数据：\n\
{csv格式的原始数据，用,作为分隔符}\n\
请根据这两部分内容，按照以下指定格式生成内容（此外不要输出任何多余的开头、结尾、注释）\n\
【【【【【\n\
{前端 Echarts V5 的 option 配置对象js代码（输出 json 格式），合理地将数据进行可视化，不要生成任何多余的内容，比如注释}\n\
【【【【【\n\
{明确的数据分析结论、越详细越好，不要生成多余的注释}\n\
【【【【【";

/// Failure of a chat completion, carrying the underlying cause.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("chat completion failed: {0}")]
    Chat(#[from] ChatError),
}

/// Injects the fixed system prompt ahead of each question.
pub struct Analyst {
    client: DeepSeekClient,
}

impl Analyst {
    pub fn new(client: DeepSeekClient) -> Self {
        Self { client }
    }

    /// Send one question through the chat-completion API and return the
    /// provider's raw response body.
    pub async fn ask(&self, question: &str) -> Result<String, AskError> {
        let messages = build_messages(question);
        Ok(self.client.complete(messages).await?)
    }
}

/// Message sequence for one question: the system prompt first, then the
/// caller's question verbatim.
fn build_messages(question: &str) -> Vec<Message> {
    vec![
        Message {
            role: Role::System,
            content: SYSTEM_PROMPT.to_string(),
        },
        Message {
            role: Role::User,
            content: question.to_string(),
        },
    ]
}
