/// A job card shown in the swipe demo.
#[derive(Clone, Debug, PartialEq)]
pub struct JobListing {
    pub company: &'static str,
    pub role: &'static str,
    pub ctc: &'static str,
    pub tags: &'static [&'static str],
}

pub static DEMO_JOBS: [JobListing; 5] = [
    JobListing {
        company: "Google",
        role: "Software Engineer Intern",
        ctc: "₹8 LPA",
        tags: &["Backend", "Cloud", "Go", "Kubernetes"],
    },
    JobListing {
        company: "Microsoft",
        role: "Product Manager Intern",
        ctc: "₹7.5 LPA",
        tags: &["Product", "Azure", "Analytics", "Agile"],
    },
    JobListing {
        company: "Amazon",
        role: "Full Stack Developer",
        ctc: "₹12 LPA",
        tags: &["React", "Node.js", "AWS", "Microservices"],
    },
    JobListing {
        company: "Flipkart",
        role: "Data Scientist",
        ctc: "₹10 LPA",
        tags: &["Python", "ML", "TensorFlow", "Analytics"],
    },
    JobListing {
        company: "Atlassian",
        role: "DevOps Engineer",
        ctc: "₹9 LPA",
        tags: &["CI/CD", "Docker", "Jenkins", "Monitoring"],
    },
];
