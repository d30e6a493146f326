//! Static skill vocabulary used for resume and job-description scans.

pub const PROGRAMMING_LANGUAGES: &str = "Programming Languages";
pub const WEB_TECHNOLOGIES: &str = "Web Technologies";
pub const DATABASES: &str = "Databases";
pub const CLOUD_DEVOPS: &str = "Cloud & DevOps";
pub const MOBILE_DEVELOPMENT: &str = "Mobile Development";
pub const DATA_SCIENCE_AI: &str = "Data Science & AI";
pub const TOOLS_FRAMEWORKS: &str = "Tools & Frameworks";

/// Category → known skills, in presentation order. A skill may sit in more
/// than one category (Swift, Kotlin, Objective-C).
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        PROGRAMMING_LANGUAGES,
        &[
            "JavaScript", "Python", "Java", "C++", "C#", "PHP", "Ruby", "Go", "Rust", "Swift",
            "Kotlin", "TypeScript", "Scala", "Perl", "R", "MATLAB", "Dart", "Objective-C",
        ],
    ),
    (
        WEB_TECHNOLOGIES,
        &[
            "HTML", "CSS", "React", "Angular", "Vue.js", "Node.js", "Express.js", "jQuery",
            "Bootstrap", "Sass", "Less", "Webpack", "Next.js", "Nuxt.js", "Svelte", "Ember.js",
        ],
    ),
    (
        DATABASES,
        &[
            "MongoDB", "MySQL", "PostgreSQL", "SQLite", "Redis", "Cassandra", "Oracle",
            "SQL Server", "DynamoDB", "Firebase", "CouchDB", "Neo4j", "InfluxDB",
        ],
    ),
    (
        CLOUD_DEVOPS,
        &[
            "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "GitLab CI",
            "GitHub Actions", "Terraform", "Ansible", "Chef", "Puppet", "Vagrant",
        ],
    ),
    (
        MOBILE_DEVELOPMENT,
        &[
            "React Native", "Flutter", "Xamarin", "Ionic", "Cordova", "Android", "iOS",
            "Swift", "Kotlin", "Objective-C",
        ],
    ),
    (
        DATA_SCIENCE_AI,
        &[
            "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Scikit-learn",
            "Pandas", "NumPy", "Matplotlib", "Seaborn", "Jupyter", "Apache Spark", "Hadoop",
        ],
    ),
    (
        TOOLS_FRAMEWORKS,
        &[
            "Git", "SVN", "Jira", "Confluence", "Slack", "Trello", "Figma", "Adobe XD",
            "Photoshop", "Illustrator", "Sketch", "InVision",
        ],
    ),
];

/// Flat keyword list used by the simple analysis endpoint.
pub const BASIC_SKILL_KEYWORDS: &[&str] = &[
    "JavaScript", "React", "Node", "MongoDB", "Python", "SQL", "CSS", "HTML", "Java", "Docker",
];

/// Education terms looked for in resume text, already lowercase.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "degree",
    "university",
    "college",
    "computer science",
    "engineering",
    "mathematics",
    "physics",
];
