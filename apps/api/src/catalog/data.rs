//! Built-in catalog tables.

use super::{CareerPath, Priority, Resource, ResourceKind, Skill, Step};

/// (id, display name, category), in catalog order.
const SKILLS: &[(&str, &str, &str)] = &[
    // Programming languages
    ("js", "JavaScript", "Programming"),
    ("py", "Python", "Programming"),
    ("java", "Java", "Programming"),
    ("cpp", "C++", "Programming"),
    ("ts", "TypeScript", "Programming"),
    ("go", "Go", "Programming"),
    ("rust", "Rust", "Programming"),
    ("php", "PHP", "Programming"),
    ("csharp", "C#", "Programming"),
    ("swift", "Swift", "Programming"),
    ("kotlin", "Kotlin", "Programming"),
    ("dart", "Dart", "Programming"),
    // Frameworks & libraries
    ("react", "React", "Frontend"),
    ("vue", "Vue.js", "Frontend"),
    ("angular", "Angular", "Frontend"),
    ("nextjs", "Next.js", "Frontend"),
    ("nuxt", "Nuxt", "Frontend"),
    ("svelte", "Svelte", "Frontend"),
    ("react-native", "React Native", "Mobile"),
    ("flutter", "Flutter", "Mobile"),
    ("node", "Node.js", "Backend"),
    ("express", "Express.js", "Backend"),
    ("django", "Django", "Backend"),
    ("flask", "Flask", "Backend"),
    ("spring", "Spring Boot", "Backend"),
    ("laravel", "Laravel", "Backend"),
    ("rails", "Ruby on Rails", "Backend"),
    ("graphql", "GraphQL", "Backend"),
    ("grpc", "gRPC", "Backend"),
    ("redis", "Redis", "Backend"),
    ("mongodb", "MongoDB", "Backend"),
    ("postgres", "PostgreSQL", "Backend"),
    ("mysql", "MySQL", "Backend"),
    // Data & analytics
    ("sql", "SQL", "Data"),
    ("pandas", "Pandas", "Data"),
    ("numpy", "NumPy", "Data"),
    ("r", "R", "Data"),
    ("tableau", "Tableau", "Data"),
    ("powerbi", "Power BI", "Data"),
    ("spark", "Apache Spark", "Data"),
    ("hadoop", "Hadoop", "Data"),
    ("airflow", "Apache Airflow", "Data"),
    ("ml", "Machine Learning", "Data"),
    ("dl", "Deep Learning", "Data"),
    ("nlp", "Natural Language Processing", "Data"),
    // Cloud & DevOps
    ("aws", "AWS", "Cloud"),
    ("azure", "Azure", "Cloud"),
    ("gcp", "Google Cloud", "Cloud"),
    ("docker", "Docker", "DevOps"),
    ("k8s", "Kubernetes", "DevOps"),
    ("terraform", "Terraform", "DevOps"),
    ("ansible", "Ansible", "DevOps"),
    ("jenkins", "Jenkins", "DevOps"),
    ("gitlab-ci", "GitLab CI", "DevOps"),
    ("linux", "Linux", "DevOps"),
    ("bash", "Bash", "DevOps"),
    // Web fundamentals & tools
    ("html", "HTML", "Web"),
    ("css", "CSS", "Web"),
    ("sass", "Sass", "Web"),
    ("tailwind", "Tailwind CSS", "Web"),
    ("git", "Git", "Tools"),
    ("testing", "Automated Testing", "Tools"),
    ("jest", "Jest", "Tools"),
    ("cypress", "Cypress", "Tools"),
    // Soft skills, design, marketing
    ("leadership", "Leadership", "Soft Skills"),
    ("communication", "Communication", "Soft Skills"),
    ("problem-solving", "Problem Solving", "Soft Skills"),
    ("teamwork", "Teamwork", "Soft Skills"),
    ("project-management", "Project Management", "Soft Skills"),
    ("agile", "Agile/Scrum", "Soft Skills"),
    ("product-thinking", "Product Thinking", "Soft Skills"),
    ("uiux", "UI/UX Design", "Design"),
    ("figma", "Figma", "Design"),
    ("seo", "SEO", "Marketing"),
    ("analytics", "Digital Analytics", "Marketing"),
];

pub fn builtin_skills() -> Vec<Skill> {
    SKILLS
        .iter()
        .map(|(id, name, category)| Skill::new(*id, *name, *category))
        .collect()
}

fn step(id: &str, title: &str, description: &str, priority: Priority, time: &str) -> Step {
    Step {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        time_estimate: time.to_string(),
    }
}

fn resource(
    id: &str,
    title: &str,
    kind: ResourceKind,
    url: &str,
    provider: &str,
    free: bool,
) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        url: url.to_string(),
        provider: provider.to_string(),
        free,
    }
}

struct CareerSpec<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    average_salary: &'a str,
    growth_rate: &'a str,
    required_skills: &'a [&'a str],
    next_steps: Vec<Step>,
    resources: Vec<Resource>,
}

impl CareerSpec<'_> {
    fn build(self) -> CareerPath {
        CareerPath {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            average_salary: self.average_salary.to_string(),
            growth_rate: self.growth_rate.to_string(),
            required_skills: self.required_skills.iter().map(|s| s.to_string()).collect(),
            next_steps: self.next_steps,
            resources: self.resources,
            match_percentage: 0,
        }
    }
}

pub fn builtin_careers() -> Vec<CareerPath> {
    use Priority::{High, Medium};
    use ResourceKind::{Book, Certification, Course, Tutorial};

    vec![
        CareerSpec {
            id: "fullstack-dev",
            title: "Full Stack Developer",
            description: "Build complete web applications from frontend to backend, working with modern frameworks and databases.",
            average_salary: "$75,000 - $120,000",
            growth_rate: "+13% (2023-2033)",
            required_skills: &["js", "react", "node", "sql", "html", "css", "git"],
            next_steps: vec![
                step("fs-1", "Master React Advanced Patterns", "Learn hooks, context, and state management patterns", High, "4-6 weeks"),
                step("fs-2", "Build REST APIs with Node.js", "Create scalable backend services and APIs", High, "3-4 weeks"),
                step("fs-3", "Learn Database Design", "Master SQL and NoSQL database concepts", Medium, "2-3 weeks"),
                step("fs-4", "Deploy Applications", "Learn cloud deployment with AWS or Vercel", Medium, "1-2 weeks"),
            ],
            resources: vec![
                resource("fs-r1", "The Complete Web Developer Course", Course, "https://www.udemy.com/course/the-complete-web-developer-course-2/", "Udemy", false),
                resource("fs-r2", "freeCodeCamp Full Stack", Course, "https://www.freecodecamp.org/", "freeCodeCamp", true),
            ],
        },
        CareerSpec {
            id: "data-scientist",
            title: "Data Scientist",
            description: "Extract insights from data using statistical analysis, machine learning, and data visualization.",
            average_salary: "$95,000 - $165,000",
            growth_rate: "+35% (2023-2033)",
            required_skills: &["py", "sql", "pandas", "numpy", "r", "tableau"],
            next_steps: vec![
                step("ds-1", "Master Machine Learning", "Learn scikit-learn, TensorFlow, and model evaluation", High, "8-10 weeks"),
                step("ds-2", "Advanced Statistics", "Strengthen statistical analysis and hypothesis testing", High, "6-8 weeks"),
                step("ds-3", "Data Visualization", "Create compelling visualizations with matplotlib, seaborn", Medium, "3-4 weeks"),
                step("ds-4", "Build Portfolio Projects", "Complete 3-5 end-to-end data science projects", High, "12-16 weeks"),
            ],
            resources: vec![
                resource("ds-r1", "Python for Data Science Handbook", Book, "https://jakevdp.github.io/PythonDataScienceHandbook/", "O'Reilly", true),
                resource("ds-r2", "Kaggle Learn", Course, "https://www.kaggle.com/learn", "Kaggle", true),
            ],
        },
        CareerSpec {
            id: "devops-engineer",
            title: "DevOps Engineer",
            description: "Bridge development and operations by automating deployments, managing infrastructure, and ensuring scalability.",
            average_salary: "$85,000 - $140,000",
            growth_rate: "+23% (2023-2033)",
            required_skills: &["docker", "k8s", "aws", "terraform", "linux", "py", "bash"],
            next_steps: vec![
                step("do-1", "Master Container Orchestration", "Deep dive into Kubernetes and container management", High, "6-8 weeks"),
                step("do-2", "Infrastructure as Code", "Learn Terraform and CloudFormation", High, "4-6 weeks"),
                step("do-3", "CI/CD Pipelines", "Set up automated testing and deployment workflows", Medium, "3-4 weeks"),
                step("do-4", "Monitoring & Logging", "Implement observability with Prometheus, Grafana", Medium, "2-3 weeks"),
            ],
            resources: vec![
                resource("do-r1", "AWS Certified DevOps Engineer", Certification, "https://aws.amazon.com/certification/certified-devops-engineer-professional/", "AWS", false),
                resource("do-r2", "Kubernetes Documentation", Tutorial, "https://kubernetes.io/docs/tutorials/", "Kubernetes", true),
            ],
        },
        CareerSpec {
            id: "frontend-developer",
            title: "Frontend Developer",
            description: "Build interactive, accessible user interfaces with modern JS frameworks and CSS tooling.",
            average_salary: "$65,000 - $110,000",
            growth_rate: "+15% (2023-2033)",
            required_skills: &["js", "ts", "react", "nextjs", "html", "css", "tailwind"],
            next_steps: vec![
                step("fe-1", "Master React & Next.js", "SSR/SSG, routing, data fetching patterns", High, "4-6 weeks"),
                step("fe-2", "Advanced CSS Architecture", "BEM, utility-first, design systems", Medium, "2-3 weeks"),
                step("fe-3", "Testing UI", "Write tests with Jest, React Testing Library, Cypress", Medium, "2-3 weeks"),
            ],
            resources: vec![
                resource("fe-r1", "React Docs", Tutorial, "https://react.dev/learn", "React", true),
                resource("fe-r2", "Next.js Learn", Tutorial, "https://nextjs.org/learn", "Vercel", true),
            ],
        },
        CareerSpec {
            id: "backend-developer",
            title: "Backend Developer",
            description: "Design and implement robust APIs, services, and data layers for scalable systems.",
            average_salary: "$75,000 - $125,000",
            growth_rate: "+12% (2023-2033)",
            required_skills: &["node", "express", "postgres", "redis", "graphql", "docker", "aws"],
            next_steps: vec![
                step("be-1", "API Design", "RESTful design, GraphQL schemas, gRPC contracts", High, "3-4 weeks"),
                step("be-2", "Data Modeling", "Relational design, indexing, caching strategies", High, "3-4 weeks"),
                step("be-3", "Observability", "Logging, tracing, metrics with modern stacks", Medium, "2-3 weeks"),
            ],
            resources: vec![
                resource("be-r1", "Express Guide", Tutorial, "https://expressjs.com/", "Express", true),
                resource("be-r2", "Postgres Tutorial", Tutorial, "https://www.postgresql.org/docs/", "PostgreSQL", true),
            ],
        },
        CareerSpec {
            id: "mobile-developer",
            title: "Mobile App Developer",
            description: "Build high-quality mobile apps for iOS and Android using cross-platform or native tools.",
            average_salary: "$70,000 - $120,000",
            growth_rate: "+18% (2023-2033)",
            required_skills: &["react-native", "flutter", "kotlin", "swift", "git", "testing"],
            next_steps: vec![
                step("mo-1", "Master Cross-Platform", "Learn React Native/Flutter advanced patterns", High, "4-6 weeks"),
                step("mo-2", "Native Integrations", "Bridges, platform APIs, performance tuning", Medium, "2-3 weeks"),
            ],
            resources: vec![
                resource("mo-r1", "React Native Docs", Tutorial, "https://reactnative.dev/docs/getting-started", "Meta", true),
                resource("mo-r2", "Flutter Docs", Tutorial, "https://docs.flutter.dev/", "Google", true),
            ],
        },
        CareerSpec {
            id: "ml-engineer",
            title: "Machine Learning Engineer",
            description: "Productionize ML models, build pipelines, and deploy inference at scale.",
            average_salary: "$110,000 - $180,000",
            growth_rate: "+21% (2023-2033)",
            required_skills: &["py", "ml", "dl", "sql", "airflow", "spark", "aws"],
            next_steps: vec![
                step("ml-1", "Model Serving", "FastAPI/TensorFlow Serving, batch vs realtime", High, "3-4 weeks"),
                step("ml-2", "Pipelines & Orchestration", "Airflow/Kubeflow, feature stores", High, "3-5 weeks"),
            ],
            resources: vec![
                resource("ml-r1", "MLOps Guide", Tutorial, "https://ml-ops.org/", "MLOps", true),
                resource("ml-r2", "TensorFlow", Tutorial, "https://www.tensorflow.org/", "Google", true),
            ],
        },
        CareerSpec {
            id: "data-engineer",
            title: "Data Engineer",
            description: "Design data platforms, pipelines, and warehouses to power analytics and ML.",
            average_salary: "$100,000 - $160,000",
            growth_rate: "+20% (2023-2033)",
            required_skills: &["py", "sql", "spark", "airflow", "gcp", "aws", "hadoop"],
            next_steps: vec![
                step("de-1", "Batch & Streaming", "ETL/ELT, stream processing patterns", High, "3-4 weeks"),
                step("de-2", "Data Warehousing", "Dimensional modeling, BigQuery/Redshift", High, "3-4 weeks"),
            ],
            resources: vec![
                resource("de-r1", "Airflow Docs", Tutorial, "https://airflow.apache.org/docs/", "Apache", true),
                resource("de-r2", "Spark Guide", Tutorial, "https://spark.apache.org/docs/latest/", "Apache", true),
            ],
        },
        CareerSpec {
            id: "cloud-architect",
            title: "Cloud Architect",
            description: "Design cloud-native architectures emphasizing reliability, performance, and cost efficiency.",
            average_salary: "$120,000 - $190,000",
            growth_rate: "+17% (2023-2033)",
            required_skills: &["aws", "gcp", "azure", "terraform", "k8s", "linux", "networking"],
            next_steps: vec![
                step("ca-1", "Well-Architected", "Cloud best practices, security, cost controls", High, "3-4 weeks"),
                step("ca-2", "Multi-Cloud Patterns", "Abstractions, portability, hybrid approaches", Medium, "2-3 weeks"),
            ],
            resources: vec![
                resource("ca-r1", "AWS Well-Architected", Tutorial, "https://aws.amazon.com/architecture/well-architected/", "AWS", true),
                resource("ca-r2", "GCP Architecture Center", Tutorial, "https://cloud.google.com/architecture", "Google", true),
            ],
        },
        CareerSpec {
            id: "ui-ux-designer",
            title: "UI/UX Designer",
            description: "Design intuitive, delightful user experiences and interfaces informed by research.",
            average_salary: "$70,000 - $120,000",
            growth_rate: "+11% (2023-2033)",
            required_skills: &["uiux", "figma", "html", "css", "communication", "product-thinking"],
            next_steps: vec![
                step("ux-1", "Design Systems", "Tokens, components, accessibility", High, "2-3 weeks"),
                step("ux-2", "User Research", "Interviews, usability testing, synthesis", Medium, "2-3 weeks"),
            ],
            resources: vec![
                resource("ux-r1", "Figma Learn", Tutorial, "https://help.figma.com/hc/en-us/articles/360040514213-Get-started-in-Figma", "Figma", true),
                resource("ux-r2", "Material Design", Tutorial, "https://m3.material.io/", "Google", true),
            ],
        },
        CareerSpec {
            id: "qa-engineer",
            title: "QA/Test Automation Engineer",
            description: "Ensure product quality with automated tests and resilient testing strategies.",
            average_salary: "$65,000 - $110,000",
            growth_rate: "+9% (2023-2033)",
            required_skills: &["testing", "jest", "cypress", "js", "ts", "git", "ci"],
            next_steps: vec![
                step("qa-1", "Automation Frameworks", "Design scalable test frameworks", High, "2-3 weeks"),
                step("qa-2", "CI Integration", "Integrate tests into CI/CD pipelines", Medium, "1-2 weeks"),
            ],
            resources: vec![
                resource("qa-r1", "Testing Library", Tutorial, "https://testing-library.com/docs/react-testing-library/intro/", "RTL", true),
                resource("qa-r2", "Cypress Docs", Tutorial, "https://docs.cypress.io/", "Cypress", true),
            ],
        },
        CareerSpec {
            id: "cybersecurity-analyst",
            title: "Cybersecurity Analyst",
            description: "Protect systems and data through monitoring, threat analysis, and security best practices.",
            average_salary: "$85,000 - $140,000",
            growth_rate: "+28% (2023-2033)",
            required_skills: &["linux", "networking", "aws", "python", "siem", "k8s"],
            next_steps: vec![
                step("sec-1", "Threat Modeling", "STRIDE, attack trees, risk assessment", High, "2-3 weeks"),
                step("sec-2", "Hardening & Monitoring", "CIS benchmarks, SIEM tooling", Medium, "2-3 weeks"),
            ],
            resources: vec![
                resource("sec-r1", "OWASP Top 10", Tutorial, "https://owasp.org/www-project-top-ten/", "OWASP", true),
                resource("sec-r2", "CIS Benchmarks", Tutorial, "https://www.cisecurity.org/cis-benchmarks", "CIS", true),
            ],
        },
        CareerSpec {
            id: "product-manager",
            title: "Product Manager",
            description: "Drive product strategy, prioritize roadmaps, and align teams to deliver customer value.",
            average_salary: "$95,000 - $160,000",
            growth_rate: "+10% (2023-2033)",
            required_skills: &["communication", "leadership", "analytics", "seo", "product-thinking", "project-management"],
            next_steps: vec![
                step("pm-1", "Roadmapping", "Prioritization frameworks, stakeholder alignment", High, "2-3 weeks"),
                step("pm-2", "Discovery", "Customer interviews, problem validation", High, "2-3 weeks"),
            ],
            resources: vec![
                resource("pm-r1", "SVPG Articles", Tutorial, "https://www.svpg.com/articles/", "SVPG", true),
                resource("pm-r2", "Intercom on Product", Book, "https://www.intercom.com/resources/books/intercom-on-product-management", "Intercom", true),
            ],
        },
    ]
    .into_iter()
    .map(CareerSpec::build)
    .collect()
}
