//! Static page content.

/// Lab display name.
pub const LAB_NAME: &str = "AI & Smart City Lab";

/// Typed-out hero headline.
pub const HERO_HEADLINE: &str = "Artificial Intelligence Solutions";

pub const HERO_TAGLINE: &str = "AI & Smart City Lab at Gachon University, led by Professor Young Im Cho. \
Our research focuses on advancing artificial intelligence and its applications using multi-modal and \
multi-task AI, AI inference and validation systems.";

pub const ABOUT_TEXT: &str = "Under the guidance of Professor Young Im Cho, our lab has published over \
300 research articles in leading scientific journals. Our work spans AI-driven applications including \
wildfire detection, medical diagnostics and intelligent image processing.";

/// External staff portal linked from the navigation bar.
pub const LOGIN_URL: &str = "https://b24-10dywj.bitrix24.com/online/";

/// In-page navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Services", anchor: "services" },
    NavItem { label: "Portfolio", anchor: "portfolio" },
    NavItem { label: "Members", anchor: "members" },
    NavItem { label: "Publications", anchor: "publications" },
    NavItem { label: "Contact", anchor: "contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone { year: "2019", title: "Lab Founded", description: "Started with a vision to make AI practical for smart cities" },
    Milestone { year: "2020", title: "First AI Platform", description: "Launched our first machine learning research platform" },
    Milestone { year: "2021", title: "Scale & Growth", description: "Expanded industry and government collaborations" },
    Milestone { year: "2022", title: "AI Innovation", description: "Advanced lightweight neural networks for edge devices" },
    Milestone { year: "2023", title: "Standards Leadership", description: "Led international AI standardization work" },
    Milestone { year: "2024", title: "Future Forward", description: "Multi-modal AI for medicine and disaster prevention" },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Machine Learning",
        description: "Models that learn from data to predict, classify and optimize outcomes.",
        icon: "🧠",
        features: &["Predictive Analytics", "Pattern Recognition", "Data Mining", "Model Optimization"],
    },
    Service {
        title: "Computer Vision",
        description: "Visual AI for image recognition, object detection and automated inspection.",
        icon: "👁️",
        features: &["Image Classification", "Object Detection", "Facial Recognition", "Quality Inspection"],
    },
    Service {
        title: "AI Inference",
        description: "Deploy and accelerate models for real-time and batch prediction.",
        icon: "🚀",
        features: &["Model Serving", "Edge Deployment", "Low-latency Inference", "Scalability"],
    },
    Service {
        title: "AI Standardization",
        description: "Standards for reliable, interoperable and trustworthy AI systems.",
        icon: "📏",
        features: &["Compliance", "Interoperability", "AI Evaluation", "Best Practices"],
    },
    Service {
        title: "Multi-modal AI",
        description: "Joint analysis of text, images and sensor streams.",
        icon: "🧩",
        features: &["Vision & Language", "Cross-modal Learning", "Sensor Fusion", "Unified Models"],
    },
    Service {
        title: "Data Fusion",
        description: "Combine diverse datasets to improve accuracy and uncover new insight.",
        icon: "🔗",
        features: &["Data Integration", "Multi-source Analytics", "Signal Processing", "Knowledge Graphs"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Smart Manufacturing AI",
        category: "Computer Vision",
        description: "AI-powered quality control that reduced defects and increased production efficiency.",
        image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?auto=format&fit=crop&w=800&q=80",
        technologies: &["TensorFlow", "OpenCV", "Python", "Edge Computing"],
        metrics: &["85% defect reduction", "40% faster inspection"],
    },
    Project {
        title: "Healthcare Diagnosis Platform",
        category: "Machine Learning",
        description: "Deep learning for medical image analysis and early disease detection.",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&w=800&q=80",
        technologies: &["PyTorch", "Medical Imaging", "Cloud Computing"],
        metrics: &["95% accuracy", "10x faster diagnosis"],
    },
    Project {
        title: "Wildfire Detection",
        category: "Computer Vision",
        description: "Real-time fire and smoke detection for large, complex outdoor environments.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80",
        technologies: &["Multiscale CNNs", "Attention Mechanisms", "Drones"],
        metrics: &["Early warning", "Works in haze and low light"],
    },
    Project {
        title: "Autonomous Logistics",
        category: "AI Automation",
        description: "Supply chain optimization reducing costs and improving delivery times.",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=800&q=80",
        technologies: &["Reinforcement Learning", "IoT Integration", "Route Optimization"],
        metrics: &["30% cost reduction", "25% faster delivery"],
    },
    Project {
        title: "Smart Home Safety",
        category: "IoT & AI",
        description: "Multi-scale early fire detection for smart home environments.",
        image: "https://images.unsplash.com/photo-1531297484001-80022131f5a1?auto=format&fit=crop&w=800&q=80",
        technologies: &["Deep Learning", "Embedded Inference", "Sensor Fusion"],
        metrics: &["Faster response times", "Runs on-device"],
    },
    Project {
        title: "Predictive Maintenance",
        category: "IoT & AI",
        description: "Predicting equipment failures before they occur.",
        image: "https://images.unsplash.com/photo-1473091534298-04dcbce3278c?auto=format&fit=crop&w=800&q=80",
        technologies: &["IoT Sensors", "Time Series Analysis", "Anomaly Detection"],
        metrics: &["70% downtime reduction", "99.5% uptime"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub const MEMBERS: &[Member] = &[
    Member {
        name: "Prof. Cho Young-Im",
        role: "Chief of the Lab",
        expertise: "Gachon University Professor, HoD of ISO/IEC JTC 1/SC 42, Convenor of ISO/IEC JTC 1/SC 43 WG 5",
        image: "/static/prof.jpg",
        bio: "Standards Subcommittee for the AI New Industry Committee under the Ministry of Trade.",
    },
    Member {
        name: "Mr. Oh Kang-Hwan",
        role: "Project Manager",
        expertise: "Artificial Intelligence & Software Development",
        image: "/static/mr_oh.png",
        bio: "Project planning leader.",
    },
    Member {
        name: "Dr. Muksimova Shakhnoza",
        role: "Assistant Professor",
        expertise: "Artificial Intelligence, Medical AI",
        image: "/static/shaxnoza.jpg",
        bio: "Real-time AI for medical imaging, fire detection and drones; lightweight and multi-modal models.",
    },
    Member {
        name: "Mukhtorov Doni",
        role: "Ph.D. Researcher",
        expertise: "AI research, software engineering, ISO/IEC JTC 1/SC 43 WG 5 Project Editor",
        image: "/static/doni.jpg",
        bio: "Scaling AI systems.",
    },
    Member {
        name: "Misheel Galbadrakh",
        role: "Master's Researcher",
        expertise: "Artificial Intelligence, Computer Vision",
        image: "/static/michael.jpg",
        bio: "Computer vision, machine learning and data labeling.",
    },
    Member {
        name: "Saydirasulov Norkobil",
        role: "Post Doc",
        expertise: "Artificial Intelligence",
        image: "/static/norqobilaka.jpg",
        bio: "Fair, transparent and beneficial AI systems.",
    },
    Member {
        name: "Man Qia Yue",
        role: "Assistant Professor",
        expertise: "MLOps & Infrastructure",
        image: "/static/gachon_logo.jpg",
        bio: "Scaling AI systems and building robust ML infrastructure.",
    },
    Member {
        name: "Bolikulov Furqat",
        role: "Ph.D. Researcher",
        expertise: "Fire detection, 3D image reconstruction, tree health detection",
        image: "/static/gachon_logo.jpg",
        bio: "Researcher.",
    },
    Member {
        name: "Khasanov Asliddin",
        role: "Master's Researcher",
        expertise: "Fire detection, 3D image reconstruction, tree health detection",
        image: "/static/asliddin.jpg",
        bio: "Researcher.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub title: &'static str,
    pub content: &'static str,
    pub href: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { title: "Email Us", content: "yicho@gachon.ac.kr", href: "mailto:yicho@gachon.ac.kr" },
    ContactInfo { title: "Call Us", content: "+82 10 3970 9302", href: "tel:+821039709302" },
];

/// Embedded campus map.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3162.877320724494!2d127.13129667565386!3d37.45512543214005!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x357ca9223b7f1c5f%3A0x91acd5ebf975573b!5e0!3m2!1sko!2skr";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_anchors_are_unique() {
        let mut anchors: Vec<_> = NAV_ITEMS.iter().map(|n| n.anchor).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_nav_href() {
        assert_eq!(NAV_ITEMS[5].href(), "#publications");
    }

    #[test]
    fn test_members_lead_with_principal() {
        assert_eq!(MEMBERS[0].role, "Chief of the Lab");
    }
}
