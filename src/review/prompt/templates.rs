//! Built-in prompt templates.

/// Prompt asking an assistant for a first-pass triage QA of a module.
pub const TRIAGE_QA_TEMPLATE: &str = r#"You are performing a triage QA review of the module "{{ module_name }}".

Branch: {{ branch_name }}
Kernel version: {{ kernel_version }}
{% if assigned_to %}Developer: {{ assigned_to }}
{% endif %}
Review the changes on the branch against the kernel version above.
Report blocking defects, missing tests, and deviations from kernel
conventions. End with a single line reading either "Assessment: Pass"
or "Assessment: Fail".
"#;

/// Briefing handed to a solution architect before the SA review.
pub const SA_REVIEW_TEMPLATE: &str = r#"Solution-architect review briefing for "{{ module_name }}" ({{ branch_name }}).

Current status: {{ status }}
Kernel version: {{ kernel_version }}
{% if triage_assessment %}Triage QA assessment: {{ triage_assessment }}
Triage QA transcript:
{{ triage_output }}
{% else %}No triage QA has been recorded for this module.
{% endif %}
Record either "SA Approved (Ready for Dev Merge)" or "SA Revision Requested".
"#;
