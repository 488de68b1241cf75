use crate::models::{Course, CourseModule, ModuleKind};

fn langs(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn module(id: u32, title: &str, duration: &str, kind: ModuleKind) -> CourseModule {
    CourseModule {
        id,
        title: title.to_string(),
        duration: duration.to_string(),
        kind,
        is_completed: None,
    }
}

/// The six courses the catalog ships with, in definition order.
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Basic Literacy and Numeracy".to_string(),
            description: "Learn foundational reading, writing, and math skills at your own pace with practical, everyday examples.".to_string(),
            image_url: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1409&q=80".to_string(),
            category: "Basic Education".to_string(),
            languages: langs(&["English", "Spanish", "Hindi"]),
            duration: "10 weeks".to_string(),
            is_offline_available: true,
            instructor: "Sarah Johnson".to_string(),
            enrolled_count: 1240,
            modules: vec![
                module(1, "Introduction to Reading", "45 min", ModuleKind::Video),
                module(2, "Basic Vocabulary", "1 hr", ModuleKind::Interactive),
                module(3, "Simple Sentences", "1.5 hrs", ModuleKind::Text),
                module(4, "Reading Comprehension", "1 hr", ModuleKind::Quiz),
                module(5, "Introduction to Numbers", "45 min", ModuleKind::Video),
            ],
        },
        Course {
            id: 2,
            title: "Introduction to Digital Skills".to_string(),
            description: "Learn the basics of using computers, smartphones, and the internet safely and effectively.".to_string(),
            image_url: "https://images.unsplash.com/photo-1531297484001-80022131f5a1?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1420&q=80".to_string(),
            category: "Digital Skills".to_string(),
            languages: langs(&["English", "French", "Swahili"]),
            duration: "4 weeks".to_string(),
            is_offline_available: true,
            instructor: "Michael Chen".to_string(),
            enrolled_count: 890,
            modules: vec![
                module(1, "Understanding Devices", "30 min", ModuleKind::Video),
                module(2, "Navigating Operating Systems", "1 hr", ModuleKind::Interactive),
                module(3, "Internet Basics", "45 min", ModuleKind::Video),
                module(4, "Email Essentials", "1 hr", ModuleKind::Interactive),
                module(5, "Online Safety", "1 hr", ModuleKind::Quiz),
            ],
        },
        Course {
            id: 3,
            title: "Sustainable Agriculture Practices".to_string(),
            description: "Learn environmentally friendly farming techniques that increase yield while preserving resources.".to_string(),
            image_url: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1470&q=80".to_string(),
            category: "Agriculture".to_string(),
            languages: langs(&["English", "Swahili", "Hindi"]),
            duration: "8 weeks".to_string(),
            is_offline_available: true,
            instructor: "Amara Okafor".to_string(),
            enrolled_count: 756,
            modules: vec![
                module(1, "Introduction to Sustainability", "45 min", ModuleKind::Video),
                module(2, "Soil Health Management", "1.5 hrs", ModuleKind::Text),
                module(3, "Water Conservation", "1 hr", ModuleKind::Interactive),
                module(4, "Natural Pest Control", "1 hr", ModuleKind::Video),
                module(5, "Crop Rotation Techniques", "1 hr", ModuleKind::Quiz),
            ],
        },
        Course {
            id: 4,
            title: "Community Health Worker Training".to_string(),
            description: "Essential skills for community health workers to provide basic healthcare education and services.".to_string(),
            image_url: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1470&q=80".to_string(),
            category: "Health".to_string(),
            languages: langs(&["English", "Spanish", "French"]),
            duration: "12 weeks".to_string(),
            is_offline_available: true,
            instructor: "Dr. Elena Rodriguez".to_string(),
            enrolled_count: 1120,
            modules: vec![
                module(1, "Role of a Community Health Worker", "1 hr", ModuleKind::Video),
                module(2, "Basic First Aid", "2 hrs", ModuleKind::Interactive),
                module(3, "Maternal and Child Health", "1.5 hrs", ModuleKind::Video),
                module(4, "Common Illnesses Prevention", "1 hr", ModuleKind::Text),
                module(5, "Health Education Techniques", "1 hr", ModuleKind::Quiz),
            ],
        },
        Course {
            id: 5,
            title: "Small Business Fundamentals".to_string(),
            description: "Start and grow a small business with limited resources through practical entrepreneurship skills.".to_string(),
            image_url: "https://images.unsplash.com/photo-1556761175-b413da4baf72?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1374&q=80".to_string(),
            category: "Entrepreneurship".to_string(),
            languages: langs(&["English", "Spanish", "Hindi"]),
            duration: "6 weeks".to_string(),
            is_offline_available: false,
            instructor: "Carlos Mendoza".to_string(),
            enrolled_count: 945,
            modules: vec![
                module(1, "Identifying Business Opportunities", "45 min", ModuleKind::Video),
                module(2, "Business Planning Basics", "1 hr", ModuleKind::Interactive),
                module(3, "Simple Bookkeeping", "1.5 hrs", ModuleKind::Interactive),
                module(4, "Marketing On a Budget", "1 hr", ModuleKind::Video),
                module(5, "Growing Your Business", "1 hr", ModuleKind::Quiz),
            ],
        },
        Course {
            id: 6,
            title: "Water Sanitation and Hygiene".to_string(),
            description: "Learn practical skills for clean water management and basic hygiene practices for healthier communities.".to_string(),
            image_url: "https://images.unsplash.com/photo-1543393379-62a52fd2d078?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1470&q=80".to_string(),
            category: "Health".to_string(),
            languages: langs(&["English", "Swahili", "French"]),
            duration: "4 weeks".to_string(),
            is_offline_available: true,
            instructor: "Jane Mutua".to_string(),
            enrolled_count: 802,
            modules: vec![
                module(1, "Clean Water Basics", "45 min", ModuleKind::Video),
                module(2, "Water Treatment Methods", "1 hr", ModuleKind::Interactive),
                module(3, "Sanitation Infrastructure", "1 hr", ModuleKind::Text),
                module(4, "Hand Hygiene", "30 min", ModuleKind::Video),
                module(5, "Community Practice Implementation", "1 hr", ModuleKind::Quiz),
            ],
        },
    ]
}
