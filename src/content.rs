//! Static portfolio content.
//!
//! The dataset is code: no I/O, no parsing. Sections render straight from
//! these structs.

#[derive(Debug, Clone, Copy)]
pub struct Personal {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub avatar_fallback: &'static str,
    pub resume_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AboutContent {
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0 to 100.
    pub level: u8,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub label: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub featured: bool,
    pub ai_powered: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct PortfolioContent {
    pub personal: Personal,
    pub about: AboutContent,
    pub typing_phrases: &'static [&'static str],
    pub skill_categories: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub experience: &'static [ExperienceEntry],
    pub education: &'static [EducationEntry],
}

/// Fallback shown when a project or profile image cannot be decoded.
pub const PLACEHOLDER_IMAGE: &str = "assets/images/placeholder.png";

pub const PORTFOLIO: PortfolioContent = PortfolioContent {
    personal: Personal {
        name: "Ravi Ranjan",
        title: "AI-Powered Full Stack Developer | MERN Stack Expert | ML Engineering Specialist",
        tagline: "Transforming businesses with AI-driven solutions and scalable architectures",
        email: "raviranjan35@outlook.com",
        phone: "+918709805710",
        linkedin: "https://linkedin.com/in/raviranjan946",
        github: "https://github.com/ravi1122",
        location: "India",
        avatar: "assets/images/profile.jpg",
        avatar_fallback: PLACEHOLDER_IMAGE,
        resume_url: "assets/resume.pdf",
    },

    about: AboutContent {
        description: "AI-focused Full Stack Developer with 8+ years of experience specializing in \
            MERN stack development and modern AI/ML integration. Recently completed comprehensive \
            AI Master class certification, now leveraging cutting-edge AI technologies including \
            Large Language Models, Computer Vision, and Neural Networks. Proven expertise in \
            leading cross-functional teams, implementing AI-powered solutions, and delivering \
            intelligent software products across e-commerce, IoT, and enterprise applications \
            with international onsite experience.",
        highlights: &[
            "🎓 Certified AI Master with the latest ML/AI technologies",
            "🚀 8+ years of full stack and AI/ML development experience",
            "🌍 International onsite experience (Netherlands, South Korea)",
            "👥 Led teams of up to 10 developers across AI projects",
            "🏗 MACH architecture and headless commerce expertise",
            "☁ AWS cloud solutions with AI/ML services",
            "🏆 Multiple client appreciation awards for AI implementations",
            "🤖 Expertise in LLMs, Computer Vision, and Neural Networks",
        ],
    },

    typing_phrases: &[
        "AI-Powered Full Stack Developer",
        "ML Engineering Specialist",
        "MERN Stack Expert",
        "Team Lead & Architect",
        "AWS AI/ML Expert",
        "AI Innovation Leader",
    ],

    skill_categories: &[
        SkillCategory {
            label: "AI & ML",
            icon: "🧠",
            skills: &[
                Skill { name: "Machine Learning", level: 90, icon: "🧠" },
                Skill { name: "Large Language Models", level: 85, icon: "🤖" },
                Skill { name: "Computer Vision", level: 80, icon: "👁" },
                Skill { name: "Neural Networks", level: 85, icon: "🕸" },
                Skill { name: "TensorFlow/PyTorch", level: 80, icon: "🐍" },
                Skill { name: "OpenAI APIs", level: 90, icon: "⚙" },
                Skill { name: "Prompt Engineering", level: 95, icon: "✨" },
            ],
        },
        SkillCategory {
            label: "Frontend",
            icon: "🎨",
            skills: &[
                Skill { name: "React.js", level: 95, icon: "⚛" },
                Skill { name: "Next.js", level: 90, icon: "⚛" },
                Skill { name: "JavaScript", level: 95, icon: "🟨" },
                Skill { name: "TypeScript", level: 90, icon: "🔷" },
                Skill { name: "HTML5/CSS3", level: 95, icon: "🌐" },
                Skill { name: "Redux/Redux Toolkit", level: 90, icon: "🗃" },
                Skill { name: "EnactJS", level: 85, icon: "📺" },
            ],
        },
        SkillCategory {
            label: "Backend",
            icon: "🖥",
            skills: &[
                Skill { name: "Node.js", level: 95, icon: "🟩" },
                Skill { name: "Express.js", level: 90, icon: "🚏" },
                Skill { name: "GraphQL", level: 85, icon: "🕹" },
                Skill { name: "REST APIs", level: 95, icon: "🔁" },
                Skill { name: "Python APIs", level: 85, icon: "🐍" },
                Skill { name: "MongoDB", level: 90, icon: "🗄" },
                Skill { name: "MySQL", level: 85, icon: "🗄" },
            ],
        },
        SkillCategory {
            label: "Cloud & DevOps",
            icon: "☁",
            skills: &[
                Skill { name: "AWS Lambda", level: 90, icon: "λ" },
                Skill { name: "AWS SageMaker", level: 80, icon: "☁" },
                Skill { name: "AWS Bedrock", level: 85, icon: "☁" },
                Skill { name: "AWS SQS", level: 85, icon: "📨" },
                Skill { name: "AWS API Gateway", level: 85, icon: "🚪" },
                Skill { name: "Azure AI Services", level: 80, icon: "☁" },
                Skill { name: "Docker", level: 85, icon: "🐳" },
                Skill { name: "Microservices", level: 90, icon: "🧩" },
            ],
        },
        SkillCategory {
            label: "Tools & Testing",
            icon: "🔧",
            skills: &[
                Skill { name: "Jest", level: 85, icon: "🃏" },
                Skill { name: "Playwright", level: 80, icon: "🎭" },
                Skill { name: "Webpack", level: 85, icon: "📦" },
                Skill { name: "Git", level: 95, icon: "🌿" },
                Skill { name: "Postman", level: 90, icon: "✉" },
                Skill { name: "VS Code", level: 95, icon: "📝" },
            ],
        },
    ],

    projects: &[
        Project {
            title: "AI-Powered E-commerce Platform (ECP & CP4L)",
            description: "Architected next-gen e-commerce platforms using MACH architecture with \
                integrated AI recommendations, intelligent search, and ML-driven personalization. \
                Implemented headless commerce on AWS with AI/ML services for predictive analytics.",
            image: "assets/images/projects/ecommerce-platform.png",
            technologies: &[
                "Next.js", "React.js", "AI/ML", "GraphQL", "Node.js", "AWS SageMaker",
                "Commerce Tools", "Algolia", "TypeScript",
            ],
            github_url: Some("https://github.com/ravi1122"),
            live_url: None,
            featured: true,
            ai_powered: true,
        },
        Project {
            title: "Smart TV & Applications",
            description: "Developed AI-enhanced Smart TV applications with voice recognition, \
                intelligent content recommendations, and ML-powered personalization features for \
                LG webOS 24. Integrated NLP for natural language interactions.",
            image: "assets/images/projects/webos-tv-apps.png",
            technologies: &[
                "EnactJS", "React.js", "AI/ML", "NLP", "Redux Toolkit", "Node.js", "Docker", "DB8",
            ],
            github_url: Some("https://github.com/ravi1122"),
            live_url: None,
            featured: true,
            ai_powered: true,
        },
        Project {
            title: "IoT Analytics Dashboard",
            description: "Comprehensive IoT monitoring dashboard enhanced with AI-powered \
                predictive maintenance, anomaly detection, and intelligent alerting systems. \
                Implemented ML models for pattern recognition and automated decision making.",
            image: "assets/images/projects/iot-dashboard.png",
            technologies: &[
                "React.js", "Node.js", "Machine Learning", "TensorFlow", "OAuth", "JWT",
                "Docker", "Azure AI",
            ],
            github_url: Some("https://github.com/ravi1122"),
            live_url: None,
            featured: true,
            ai_powered: true,
        },
        Project {
            title: "Computer Vision Autonomous Vehicle Dashboard",
            description: "Engineered cutting-edge dashboard with advanced computer vision \
                algorithms, real-time object detection, and AI-powered decision making for \
                autonomous vehicle perception with 360-degree camera integration.",
            image: "assets/images/projects/av-dashboard.png",
            technologies: &[
                "React.js", "Node.js", "Computer Vision", "OpenCV", "TensorFlow", "REST APIs",
                "Real-time AI",
            ],
            github_url: Some("https://github.com/ravi1122"),
            live_url: None,
            featured: false,
            ai_powered: true,
        },
        Project {
            title: "E-commerce Platform Components",
            description: "Developed comprehensive React components for Meijer's e-commerce \
                platform including checkout module, product listing pages (PLP, DLP, SLP, CLP), \
                shopping cart functionality, and user account management with robust form \
                validation.",
            image: "assets/images/projects/meijer-ecommerce.png",
            technologies: &[
                "React.js", "JavaScript", "CSS3", "Form Validation", "Redux", "REST APIs",
            ],
            github_url: Some("https://github.com/ravi1122"),
            live_url: None,
            featured: false,
            ai_powered: false,
        },
        Project {
            title: "AI Chatbot & Virtual Assistant",
            description: "Built intelligent conversational AI using Large Language Models and \
                advanced NLP techniques. Features include context-aware responses, multi-language \
                support, and integration with business systems.",
            image: "assets/images/projects/ai-chatbot.png",
            technologies: &[
                "React.js", "Node.js", "OpenAI GPT", "LangChain", "NLP", "Python",
                "Vector Databases",
            ],
            github_url: Some("https://github.com/ravi1122"),
            live_url: None,
            featured: true,
            ai_powered: true,
        },
    ],

    experience: &[
        ExperienceEntry {
            title: "AI Solutions Architect & Full Stack Developer",
            company: "LKQ Corporation",
            duration: "Nov 2023 - Present",
            location: "Remote",
            achievements: &[
                "Architected and developed AI-enhanced e-commerce platforms (ECP and CP4L) using MACH architecture with intelligent recommendations",
                "Implemented ML-powered headless commerce platform on AWS stack utilizing SageMaker, Lambda, EventBridge, SQS, DynamoDB",
                "Integrated AI/ML services for predictive analytics, customer behavior analysis, and personalized user experiences",
                "Led a team of 10 developers in implementing AI-driven features and ensuring code quality standards",
                "Received Extra Miler Award from Director for exceptional AI implementation performance",
                "Technologies: NextJS, ReactJS, AI/ML, GraphQL, Node.js, AWS SageMaker, Commerce Tools, Algolia, TypeScript",
            ],
        },
        ExperienceEntry {
            title: "AI-Enhanced Senior Research Engineer",
            company: "LG Electronics (R&D)",
            duration: "Dec 2021 - Nov 2023",
            location: "Seoul, South Korea (3 months onsite)",
            achievements: &[
                "Developed AI-powered webOS TV applications with voice recognition and intelligent content recommendations",
                "Integrated NLP and ML models for personalized user experiences in Settings, Channel Management, and Picture Wizard",
                "Created intelligent Node.js services with AI-driven data processing for Luna integration",
                "Led a team of 7 engineers in developing AI-enhanced webOS TV projects with full SDLC management",
                "Successfully implemented machine learning algorithms for user behavior prediction and content optimization",
                "Received Customer Appreciation Award and Bravo Award from TATA Elxsi for AI innovation",
                "Technologies: EnactJS, ReactJS, AI/ML, NLP, Redux Toolkit, Node.js, Docker, Gerrit, DB8",
            ],
        },
        ExperienceEntry {
            title: "Senior Engineer",
            company: "TATA Elxsi (TATA Group)",
            duration: "Jan 2020 - Dec 2021",
            location: "Netherlands (1+ year onsite) / Remote",
            achievements: &[
                "Client: Royal Dutch Shell - Developed comprehensive IoT dashboard with battery monitoring and job scheduling",
                "Implemented enterprise SSO authentication using OAuth and JWT for security",
                "Client: AEye (US) - Engineered autonomous vehicle perception dashboard with 360-degree camera integration",
                "Built full-stack CRUD operations and deployed containerized applications using Docker and Azure",
                "Created single binary executable for Node.js server deployment optimization",
                "Technologies: ReactJS, Node.js, OAuth, JWT, Docker, Azure Container Registry",
            ],
        },
        ExperienceEntry {
            title: "Associate Consultant",
            company: "Capgemini India Private Limited",
            duration: "Feb 2016 - Jan 2020",
            location: "India / US Client Projects",
            achievements: &[
                "Client: Meijer (US Retail) - Developed React components for e-commerce checkout and product listing pages",
                "Implemented comprehensive form validation and resolved critical production defects",
                "Client: Cole-Haan (US Retail) - Collaborated with business stakeholders for requirement gathering",
                "Designed database objects including stored procedures, functions, and triggers",
                "Received Customer Delight Certificate from Vice President and Aspiring Certified Architect certification",
                "Ensured W3C compliance and coding standards adherence across projects",
            ],
        },
    ],

    education: &[
        EducationEntry {
            degree: "AI Master Class Certification",
            school: "Professional AI/ML Training Program",
            duration: "2024",
            location: "Online",
            details: &[
                "Comprehensive AI/ML certification covering latest technologies",
                "Large Language Models (LLMs) and Generative AI",
                "Computer Vision and Deep Learning techniques",
                "Neural Networks and Advanced ML Algorithms",
                "Hands-on experience with TensorFlow, PyTorch, and OpenAI APIs",
                "Real-world AI project implementation and deployment",
            ],
        },
        EducationEntry {
            degree: "Bachelor of Technology in Computer Science",
            school: "AKU Patna, Nalanda College of Engineering",
            duration: "2011 - 2015",
            location: "Patna, India",
            details: &[
                "Grade: 75% (First Class with Distinction)",
                "Achievement: 1st Rank in CSE Department",
                "Specialized in Software Engineering and Database Management",
                "Strong foundation in Data Structures, Algorithms, and System Design",
            ],
        },
        EducationEntry {
            degree: "Higher Secondary Certificate (Science)",
            school: "BSEB Patna, KLS College Nawada",
            duration: "2009 - 2011",
            location: "Nawada, India",
            details: &[
                "Grade: 68% in Science Stream",
                "Subjects: Physics, Chemistry, Mathematics, Computer Science",
                "Strong mathematical and analytical foundation",
            ],
        },
        EducationEntry {
            degree: "Professional AI/ML & Industry Certifications",
            school: "Industry Certifications",
            duration: "2016 - 2024",
            location: "Online/Industry",
            details: &[
                "AI Master Class Certification - Latest AI/ML Technologies (2024)",
                "Algolia Certified Developer (ACD) - Search and Discovery Platform",
                "MuleSoft Certified API 3.8 and Integration Developer",
                "Aspiring Certified Architect (Level 0) - Capgemini",
                "AWS and Azure AI/ML cloud certifications in progress",
                "OpenAI API and LangChain specialized training",
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_projects_are_a_strict_subset() {
        let featured = PORTFOLIO.projects.iter().filter(|p| p.featured).count();
        assert_eq!(featured, 4);
        assert!(featured < PORTFOLIO.projects.len());
    }

    #[test]
    fn every_project_lists_technologies() {
        for project in PORTFOLIO.projects {
            assert!(
                !project.technologies.is_empty(),
                "{} has no technologies",
                project.title
            );
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in PORTFOLIO.skill_categories {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn avatar_fallback_differs_from_primary() {
        assert_ne!(PORTFOLIO.personal.avatar, PORTFOLIO.personal.avatar_fallback);
    }

    #[test]
    fn typing_phrases_are_nonempty() {
        assert!(!PORTFOLIO.typing_phrases.is_empty());
        for phrase in PORTFOLIO.typing_phrases {
            assert!(!phrase.is_empty());
        }
    }
}
