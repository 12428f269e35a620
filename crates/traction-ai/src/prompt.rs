use crate::models::ChatMessage;

/// 验证类别。每个类别对应一套固定的评估模板。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCategory {
    Idea,
    MarketSize,
    ProblemSolution,
    BusinessModel,
}

impl ValidationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::MarketSize => "market-size",
            Self::ProblemSolution => "problem-solution",
            Self::BusinessModel => "business-model",
        }
    }

    /// 各类别的固定专家角色（system 消息）。
    pub fn persona(&self) -> &'static str {
        match self {
            Self::Idea => "You are an expert in startup validation.",
            Self::MarketSize => "You are an expert in market validation.",
            Self::ProblemSolution => {
                "You are an expert in problem and solution evaluation for startups."
            }
            Self::BusinessModel => "You are an expert in evaluating startup business models.",
        }
    }

    /// 各类别的默认生成长度上限。
    pub fn default_max_tokens(&self) -> u32 {
        match self {
            Self::Idea => 1000,
            _ => 500,
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Self::Idea => IDEA_TEMPLATE,
            Self::MarketSize => MARKET_SIZE_TEMPLATE,
            Self::ProblemSolution => PROBLEM_SOLUTION_TEMPLATE,
            Self::BusinessModel => BUSINESS_MODEL_TEMPLATE,
        }
    }
}

/// 构建单类别验证的消息序列（system 角色 + 嵌入用户文本的评估指令）。
///
/// 纯函数：相同输入总是产生相同消息；用户文本原样嵌入，不做任何内容检查。
pub fn validation_messages(category: ValidationCategory, input: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(category.persona()),
        ChatMessage::user(category.template().replace("{{INPUT}}", input)),
    ]
}

/// 构建综合验证报告的消息序列（四项输入合并到一个模板）。
pub fn overall_messages(
    idea: &str,
    market_size: &str,
    problem_solution: &str,
    business_model: &str,
) -> Vec<ChatMessage> {
    let content = OVERALL_TEMPLATE
        .replace("{{IDEA}}", idea)
        .replace("{{MARKET_SIZE}}", market_size)
        .replace("{{PROBLEM_SOLUTION}}", problem_solution)
        .replace("{{BUSINESS_MODEL}}", business_model);
    vec![ChatMessage::system(OVERALL_PERSONA), ChatMessage::user(content)]
}

/// 构建分析接口的消息序列：调用方文本不经模板加工，仅加上固定角色。
pub fn analysis_messages(idea: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(OVERALL_PERSONA), ChatMessage::user(idea)]
}

const OVERALL_PERSONA: &str = "You are a business expert evaluating startup ideas.";

const IDEA_TEMPLATE: &str = r#"Evaluate the following entrepreneurial idea:

Idea:
{{INPUT}}

Validate the idea based on the following three criteria:

Product-Market Fit: Assess whether there is a market need for the product, if the problem is significant, and if the solution effectively addresses it.
Scalability: Evaluate the potential for growth, whether the business can expand without a significant increase in costs, and if the infrastructure can support rapid growth.
Uniqueness: Determine if the idea stands out from existing solutions, whether it brings a new perspective or approach, and if there is a sustainable competitive advantage.

Provide the following three things in output:

Validation of the idea based on the above criteria.
Suggestions for improving the idea.
A rating on a scale of 1-10, considering the three criteria.
"#;

const MARKET_SIZE_TEMPLATE: &str = r#"Evaluate the market for startup:

Market Input:
{{INPUT}}

Validate the idea based on the following market criteria:

Market Details: Consider the specifics of the market, including industry characteristics and competitive landscape.
Market Size: Assess the size of the potential market and its growth potential.
Target Audience: Evaluate whether the idea effectively addresses the needs and preferences of the intended audience.
Market Trends: Determine if the idea aligns with current trends and emerging opportunities in the market.

Provide the following three things:

Validation of the idea based on the above criteria.
Suggestions for improving the idea.
A rating on a scale of 1-10, considering the market criteria.
"#;

const PROBLEM_SOLUTION_TEMPLATE: &str = r#"Evaluate the problem statement and solution for this startup:

Problem & Solution:
{{INPUT}}

Validate the idea based on the following problem and solution criteria:

Identified Problem: Assess if the problem is clearly defined, significant, and worth solving.
Solution Effectiveness: Evaluate how well the proposed solution addresses the identified problem and whether it provides a viable approach.
Unique Value Proposition: Determine if the solution offers a distinct advantage or benefit that sets it apart from existing alternatives.

Provide the following three things:

Validation of the idea based on the above criteria.
Suggestions for improving the idea.
A rating on a scale of 1-10, considering the problem and solution criteria.
"#;

const BUSINESS_MODEL_TEMPLATE: &str = r#"Evaluate the business model for this startup:

Business Model:
{{INPUT}}

Validate the idea based on the following business model and competitors criteria:

Major Revenue Stream: Assess the primary source of income and its potential for sustainability and growth.
Idea Scalability: Evaluate whether the business model allows for growth without a significant increase in costs.
Competitors: Consider the current competitive landscape and how the idea compares to existing players.
Differentiating Factor: Determine if the idea has a unique attribute or advantage that sets it apart from competitors.

Provide the following three things:

Validation of the idea based on the above criteria.
Suggestions for improving the idea.
A rating on a scale of 1-10, considering the business model and competitors criteria.
"#;

const OVERALL_TEMPLATE: &str = r#"Evaluate the following startup idea based on the provided details:

Idea: {{IDEA}}
Market: {{MARKET_SIZE}}
Problem & Solution: {{PROBLEM_SOLUTION}}
Business Model: {{BUSINESS_MODEL}}

Assess its potential by considering product-market fit, scalability, and uniqueness, and then generate a validation report with a rating out of 10. The report should include:

Validation Summary: Provide an overall assessment of the startup idea, highlighting its strengths and potential challenges.
Recommendations/Suggestions: Offer suggestions to improve the idea's market positioning, growth strategy, or other aspects.
Rating (1-10 scale): Rate the idea based on the analysis, considering how well it aligns with market needs, its growth potential, and how distinctive it is compared to competitors.
"#;
