// src/prompts.rs
//! Prompt rendering for the five operations. One parameterized entry point
//! keyed by [`OperationRequest`]; each template embeds its own strict
//! JSON-only output contract, which is the only mechanism holding the model
//! to a parseable reply. The wording of those contracts is load-bearing and
//! must not be edited casually.
//!
//! Rendering is pure: no I/O, no validation, deterministic for fixed inputs.
//! Absent optional fields render as `""` or `"Not specified"` depending on
//! what each template documents; never as a missing section marker.

use crate::types::request::{
    CareerGoalInputs, JobDetails, OperationRequest, OptimizationInputs, UserInfo,
};

const NOT_SPECIFIED: &str = "Not specified";

/// Render the prompt for any operation.
pub fn build_prompt(request: &OperationRequest) -> String {
    match request {
        OperationRequest::Analyze { resume_url } => analyze_prompt(resume_url),
        OperationRequest::Match { resume_url, job } => match_prompt(resume_url, job),
        OperationRequest::Generate {
            user,
            target_job,
            industry,
            experience_level,
        } => generate_prompt(user, target_job, industry, experience_level),
        OperationRequest::Plan { resume_url, goals } => plan_prompt(resume_url, goals),
        OperationRequest::Optimize { resume_url, inputs } => optimize_prompt(resume_url, inputs),
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn or_not_specified(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_SPECIFIED)
}

fn analyze_prompt(resume_url: &str) -> String {
    format!(
        r#"Analyze the resume available at this public URL:

RESUME_URL: {resume_url}

IMPORTANT:
- The resume is a PDF.
- You must analyze content ONLY from this resume.
- Do NOT assume missing information.
- Be precise and professional.

Follow these definitions strictly:

STRENGTHS:
- Skills, technologies, or keywords repeated multiple times
- Clear achievements and impact
- Strong formatting, structure, grammar
- Role-relevant experience

WEAKNESSES:
- Content that exists but is:
  • Generic
  • Weakly worded
  • Outdated
  • Irrelevant to modern roles
  • Overused without impact

MISSING / IMPROVEMENTS:
- Important things NOT present:
  • Missing skills
  • Missing metrics
  • Missing industry keywords
  • Missing action verbs
  • Missing clarity or structure

Return your response in STRICT JSON format:

{{
  "ats_score": number (0-100),
  "summary": "short professional summary of the resume's overall impression",
  "strengths": [ "point 1", "point 2", "point 3", "point 4", "point 5" ],
  "weaknesses": [ "point 1", "point 2", "point 3", "point 4", "point 5" ],
  "missing_elements": [ "point 1", "point 2", "point 3", "point 4", "point 5" ],
  "best_programming_languages": [ "language 1", "language 2", "language 3" ],
  "industry_scores": {{
    "Software Development": number,
    "Data Science": number,
    "AI / ML": number,
    "IT / Support": number,
    "Management": number
  }},
  "suggestions": [ "suggestion 1", "suggestion 2", "suggestion 3" ]
}}

Do NOT include explanations.
Do NOT include markdown.
Return ONLY valid JSON."#
    )
}

fn match_prompt(resume_url: &str, job: &JobDetails) -> String {
    format!(
        r#"You are an ATS Job Matching Engine.

Analyze the resume at this URL:

RESUME_URL: {resume_url}

Compare it with the following job:

Job Title: {title}
Company: {company}
Experience Level: {level}
Salary (if provided): {salary}
Job Description:
{description}

Rules:
- Do NOT rewrite the resume
- Do NOT assume skills not mentioned
- Match strictly based on resume content

Return STRICT JSON:

{{
  "match_percentage": number (0-100),
  "summary_overview": "short match summary",
  "strength_alignment": [ "point 1", "point 2", "point 3" ],
  "missing_skills": [ "skill 1", "skill 2", "skill 3", "skill 4" ],
  "final_verdict": "one-line hiring recommendation"
}}

Return ONLY JSON.
No markdown.
No explanations."#,
        title = text(&job.title),
        company = or_not_specified(&job.company),
        level = or_not_specified(&job.level),
        salary = or_not_specified(&job.salary),
        description = text(&job.description),
    )
}

fn generate_prompt(
    user: &UserInfo,
    target_job: &str,
    industry: &str,
    experience_level: &str,
) -> String {
    format!(
        r#"Please generate a professional resume based on the following information:

User Information:
Name: {name}
Email: {email}
Phone: {phone}

Target Job: {target_job}
Industry: {industry}
Experience Level: {experience_level}

Please provide a complete resume in JSON format with the following structure:
{{
    "name": "John Doe",
    "email": "john.doe@example.com",
    "phone": "+1 (555) 123-4567",
    "summary": "Professional summary...",
    "experience": [
        {{
            "title": "Job Title",
            "company": "Company Name",
            "duration": "2020 - Present",
            "description": "Job description..."
        }}
    ],
    "education": [
        {{
            "degree": "Degree Name",
            "school": "School Name",
            "year": "2020"
        }}
    ],
    "skills": ["skill1", "skill2", "skill3"]
}}"#,
        name = text(&user.name),
        email = text(&user.email),
        phone = text(&user.phone),
    )
}

fn plan_prompt(resume_url: &str, goals: &CareerGoalInputs) -> String {
    format!(
        r#"You are a Career Mentor, Skill Strategist, and Personal Growth Coach.

Analyze the resume available at this URL:

RESUME_URL: {resume_url}

User Goal Details:
- Career Aim / Goal: {career_goal}
- Target Timeframe: {timeframe}
- Preferred Industry or Domain: {preferred_industry}
- Current Skill Level (Beginner / Intermediate / Advanced): {current_skill_level}
- Learning Commitment (hours per week): {learning_commitment}
- Target Outcome (role, skill mastery, startup, freelancing, higher studies, etc.): {target_outcome}

IMPORTANT RULES:
- ❌ Do NOT suggest job titles
- ❌ Do NOT suggest companies
- ❌ Do NOT suggest job switching
- ❌ Do NOT generate career roles

You must ONLY:
- Focus on **what the user should DO**
- Provide **skills, learning steps, habits, projects, certifications**
- Base everything strictly on resume content + user inputs
- Be realistic with timeframe
- Do NOT exaggerate abilities

---

OUTPUT FORMAT (STRICT JSON ONLY)

{{
  "goal_clarity": "Short explanation of how realistic the goal is based on resume",

  "skill_gap_analysis": [
    "Missing or weak skill 1",
    "Missing or weak skill 2",
    "Missing or weak skill 3"
  ],

  "learning_roadmap": [
    {{
      "phase": "Phase 1 (0–X months)",
      "focus": "Main focus area",
      "actions": [
        "Action 1",
        "Action 2",
        "Action 3"
      ]
    }},
    {{
      "phase": "Phase 2 (X–Y months)",
      "focus": "Main focus area",
      "actions": [
        "Action 1",
        "Action 2",
        "Action 3"
      ]
    }}
  ],

  "projects_to_build": [
    "Project idea 1",
    "Project idea 2",
    "Project idea 3"
  ],

  "daily_weekly_habits": [
    "Daily habit 1",
    "Weekly habit 2",
    "Practice routine"
  ],

  "recommended_certifications": [
    "Certification 1 (if useful)",
    "Certification 2 (optional)"
  ],

  "final_guidance": "Encouraging but practical closing advice"
}}

---

RESPONSE RULES
- Return ONLY valid JSON
- No markdown
- No explanations
- No job titles
- No company names
- No extra text"#,
        career_goal = text(&goals.career_goal),
        timeframe = text(&goals.timeframe),
        preferred_industry = text(&goals.preferred_industry),
        current_skill_level = text(&goals.current_skill_level),
        learning_commitment = text(&goals.learning_commitment),
        target_outcome = text(&goals.target_outcome),
    )
}

fn optimize_prompt(resume_url: &str, inputs: &OptimizationInputs) -> String {
    format!(
        r#"You are given an EXISTING resume available at this public URL:

RESUME_URL: {resume_url}

Your task is to:

1. Analyze the existing resume
2. Improve and rewrite it
3. Align it strictly with the provided Job Description
4. Structure it for a FINAL PDF resume using a named design template

--------------------------------------------------

USER INPUTS

--------------------------------------------------

Resume Design Template:
{template_type}

(Available templates:
Cosmic, Nebula, Lunar, Eclipse, Eon, Orion, Nova, Stellar, Quantum)

Target Company:
{target_company}

Target Job Role:
{target_job_role}

Job Description:
{job_description}

Skills to Emphasize:
{skills_to_highlight}

Projects:
{projects}

Achievements:
{achievements}

Experience Level:
{experience_level}

Additional Notes:
{additional_notes}

--------------------------------------------------

TEMPLATE DESIGN BEHAVIOR (IMPORTANT)

--------------------------------------------------

Each template affects ONLY visual structure, NOT content truth:

Cosmic → Modern, bold section headers, strong hierarchy
Nebula → Creative but ATS-safe, soft emphasis, balanced spacing
Lunar → Minimal, clean, recruiter-first
Eclipse → Executive, sharp impact bullets
Eon → Timeline-focused, growth-oriented
Orion → Technical-heavy, skill-forward
Nova → Fresh graduate / early career
Stellar → Leadership & achievement-driven
Quantum → Data & metrics-oriented

You must:
- Keep content ATS-compliant
- Avoid tables or graphics that break ATS parsing
- Structure content so it can be rendered into PDF cleanly

--------------------------------------------------

STRICT CONTENT RULES (MANDATORY)

--------------------------------------------------

1. Use ONLY information from:
   - Existing resume
   - User-provided inputs
2. You MAY:
   - Rewrite bullets
   - Improve clarity
   - Add strong action verbs
   - Align wording with job description keywords
3. You MUST NOT:
   - Add fake companies or roles
   - Add fake experience
   - Add fake certifications
   - Invent metrics
4. Do NOT hallucinate achievements.
5. Ensure the resume is truthful, professional, and realistic.

--------------------------------------------------

WHAT YOU MUST DELIVER

--------------------------------------------------

- A fully updated resume aligned to the job description
- ATS-optimized wording and structure
- Template-aware organization
- Content that can be directly converted into a PDF
- FINAL output represents the completed resume

--------------------------------------------------

OUTPUT FORMAT (STRICT JSON ONLY)

--------------------------------------------------

{{
  "pdf_resume": {{
    "template_used": "{template_type}",

    "header": {{
      "name": "Use name from existing resume",
      "title": "Optimized professional title aligned with job role",
      "summary": "3–4 line ATS-optimized professional summary tailored to the job"
    }},

    "skills": [
      "Skill 1",
      "Skill 2",
      "Skill 3"
    ],

    "experience": [
      {{
        "company": "",
        "role": "",
        "duration": "",
        "bullets": [
          "Impact-focused bullet aligned with job description",
          "Action-oriented achievement",
          "Keyword-optimized responsibility"
        ]
      }}
    ],

    "projects": [
      {{
        "name": "",
        "description": "Result-oriented project description aligned to job needs"
      }}
    ],

    "education": [
      {{
        "degree": "",
        "institution": "",
        "year": ""
      }}
    ],

    "certifications": [
      "Only include if already present in original resume"
    ]
  }}
}}

--------------------------------------------------

FINAL CONSTRAINTS

--------------------------------------------------

- Return ONLY valid JSON
- No markdown
- No explanations
- No commentary
- No extra keys
- This output will be converted into a FINAL PDF resume"#,
        template_type = text(&inputs.template_type),
        target_company = text(&inputs.target_company),
        target_job_role = text(&inputs.target_job_role),
        job_description = text(&inputs.job_description),
        skills_to_highlight = text(&inputs.skills_to_highlight),
        projects = text(&inputs.projects),
        achievements = text(&inputs.achievements),
        experience_level = text(&inputs.experience_level),
        additional_notes = text(&inputs.additional_notes),
    )
}
