// src/main.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use resume_ai::{
    AnalysisService, CareerGoalInputs, GatewayConfig, JobDetails, OptimizationInputs, UserInfo,
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "resumind")]
#[command(about = "AI-backed resume analysis from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Critique and ATS-score an uploaded resume
    Analyze {
        /// Public URL of the stored resume PDF
        #[arg(long)]
        resume_url: String,
    },
    /// Score a resume against a job posting
    Match {
        #[arg(long)]
        resume_url: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Generate a resume from scratch
    Generate {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        target_job: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        experience_level: String,
    },
    /// Build a skill-development plan from a resume and a goal
    Plan {
        #[arg(long)]
        resume_url: String,
        #[arg(long)]
        career_goal: Option<String>,
        #[arg(long)]
        timeframe: Option<String>,
        #[arg(long)]
        preferred_industry: Option<String>,
        #[arg(long)]
        current_skill_level: Option<String>,
        #[arg(long)]
        learning_commitment: Option<String>,
        #[arg(long)]
        target_outcome: Option<String>,
    },
    /// Tailor a resume to a job posting using a named visual style
    Optimize {
        #[arg(long)]
        resume_url: String,
        /// One of: Cosmic, Nebula, Lunar, Eclipse, Eon, Orion, Nova,
        /// Stellar, Quantum
        #[arg(long)]
        template: Option<String>,
        #[arg(long)]
        target_company: Option<String>,
        #[arg(long)]
        target_job_role: Option<String>,
        #[arg(long)]
        job_description: Option<String>,
        #[arg(long)]
        skills: Option<String>,
        #[arg(long)]
        projects: Option<String>,
        #[arg(long)]
        achievements: Option<String>,
        #[arg(long)]
        experience_level: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GatewayConfig::load()?;
    let service = AnalysisService::new(config)?;

    let envelope = match cli.command {
        Command::Analyze { resume_url } => service.analyze_resume(&resume_url).await,
        Command::Match {
            resume_url,
            title,
            company,
            level,
            salary,
            description,
            location,
        } => {
            let job = JobDetails {
                title,
                company,
                level,
                salary,
                description,
                location,
            };
            service.match_job(&resume_url, &job).await
        }
        Command::Generate {
            name,
            email,
            phone,
            target_job,
            industry,
            experience_level,
        } => {
            let user = UserInfo { name, email, phone };
            service
                .generate_resume(&user, &target_job, &industry, &experience_level)
                .await
        }
        Command::Plan {
            resume_url,
            career_goal,
            timeframe,
            preferred_industry,
            current_skill_level,
            learning_commitment,
            target_outcome,
        } => {
            let goals = CareerGoalInputs {
                career_goal,
                timeframe,
                preferred_industry,
                current_skill_level,
                learning_commitment,
                target_outcome,
            };
            service.plan_career(&resume_url, &goals).await
        }
        Command::Optimize {
            resume_url,
            template,
            target_company,
            target_job_role,
            job_description,
            skills,
            projects,
            achievements,
            experience_level,
            notes,
        } => {
            let inputs = OptimizationInputs {
                template_type: template,
                target_company,
                target_job_role,
                job_description,
                skills_to_highlight: skills,
                projects,
                achievements,
                experience_level,
                additional_notes: notes,
            };
            service.optimize_resume(&resume_url, &inputs).await
        }
    };

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if !envelope.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}
