//! Canned inputs for the "Try Demo" button.

pub const DEMO_COMPANY: &str = "apple";

pub const DEMO_RESUME: &str = "\
Senior Software Engineer, 8 years building full-stack and backend systems. \
Led a team of 12 engineers and moved a monolith to microservices serving 2M daily users.

SKILLS
- Languages: Python, TypeScript, JavaScript, Java, Go
- Frameworks: React, Django, Flask, FastAPI, Spring Boot
- Databases: PostgreSQL, MongoDB, Redis, Elasticsearch
- Cloud & DevOps: AWS (EC2, S3, Lambda, RDS), Docker, Kubernetes, Terraform, Jenkins

HIGHLIGHTS
- Mentored 15 junior developers and ran technical interviews
- Cut deployment time by 75% with an automated release pipeline
- Brought p95 query latency from 2s to 200ms
- Shipped a recommendation service that raised engagement by 40%";

pub const DEMO_JOB_DESCRIPTION: &str = "\
Senior Software Engineer at a fast-growing fintech startup. You will build scalable \
backend services and lead technical initiatives.

REQUIREMENTS
- 5+ years of professional software engineering
- Strong Python and TypeScript
- React and Django or Flask
- PostgreSQL; MongoDB a plus
- AWS, Docker and Kubernetes
- Microservices architecture experience
- Experience mentoring other engineers

NICE TO HAVE
- Consumer-scale or fintech background
- Machine learning or data analytics exposure";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::validation::validate_lengths;

    #[test]
    fn test_demo_inputs_pass_length_guards() {
        assert_eq!(validate_lengths(DEMO_RESUME, DEMO_JOB_DESCRIPTION), Ok(()));
    }
}
