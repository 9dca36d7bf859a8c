//! Prompt construction for the completion backend.

use crate::completion::ChatMessage;
use crate::request::{CodeRequest, Operation};

/// System and user message for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn into_messages(self) -> Vec<ChatMessage> {
        vec![ChatMessage::system(self.system), ChatMessage::user(self.user)]
    }
}

/// Render the prompt for `operation` on `request`.
pub fn build(operation: Operation, request: &CodeRequest) -> Prompt {
    match operation {
        Operation::Analyze => analysis_prompt(request),
        Operation::Verify => verification_prompt(request),
    }
}

fn analysis_prompt(request: &CodeRequest) -> Prompt {
    let suite = request.suite().label();
    let system = format!(
        "You are an expert Power Platform developer specializing in {suite}. \
Provide accurate, helpful code analysis in JSON format only."
    );
    let user = format!(
        r#"You are an expert in Microsoft Power Platform, specifically {suite}.

Analyze the following {suite} code/expression and provide a comprehensive analysis:

```
{code}
```

Your analysis should include:

1. **Error Detection**: Identify any syntax errors, logical errors, or inefficiencies in the code.

2. **Corrected Code**: Provide a corrected and optimized version of the code. If no corrections are needed, return the original code.

3. **Changes Made**: List specific changes you made to improve the code. If no changes were made, state "No changes needed."

4. **Explanation**: Explain what the code does and why you made certain corrections or improvements. Be clear and concise.

5. **Best Practices**: Mention any {suite} best practices that apply.

Respond ONLY with a valid JSON object in this exact format (no markdown, no code blocks, just the JSON):
{{
  "has_errors": true or false,
  "errors": ["list of errors found"],
  "corrected_code": "the corrected code here",
  "changes": ["list of specific changes made"],
  "explanation": "detailed explanation of what the code does",
  "best_practices": ["relevant best practices"],
  "severity": "low, medium, or high"
}}"#,
        code = request.code(),
    );
    Prompt { system, user }
}

fn verification_prompt(request: &CodeRequest) -> Prompt {
    let suite = request.suite().label();
    let system = format!(
        "You are an expert Power Platform developer specializing in {suite}. \
Verify code accuracy and provide validation results in JSON format only."
    );
    let user = format!(
        r#"You are an expert in Microsoft Power Platform, specifically {suite}.

Verify if the following {suite} code is correct and follows best practices:

```
{code}
```

Your verification should determine:

1. **Is Valid**: Whether the code is syntactically correct and logically sound (true/false)

2. **Message**: A brief message about the verification status

3. **Remaining Issues**: Any errors, warnings, or issues that still exist in the code (empty array if none)

4. **Suggestions**: Any additional improvements that could be made (empty array if none)

5. **Notes**: Positive notes about what the code does well (empty array if none)

Respond ONLY with a valid JSON object in this exact format (no markdown, no code blocks, just the JSON):
{{
  "is_valid": true or false,
  "message": "brief verification message",
  "remaining_issues": ["list of any remaining issues"],
  "suggestions": ["list of improvement suggestions"],
  "notes": ["positive notes about the code"]
}}"#,
        code = request.code(),
    );
    Prompt { system, user }
}
