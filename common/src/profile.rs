//! # Profile Store
//!
//! The person presented by the CLI. Everything here is `'static`, so a
//! [`Profile`] cannot change once the program has started. Handlers only ever
//! see it through a shared reference.

/// The person behind the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub email: &'static str,
    pub hobbies: &'static [&'static str],
    pub fun_fact: &'static str,
    pub projects: &'static [Project],
}

/// A showcased project. `details` are rendered as a numbered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

impl Profile {
    /// The profile compiled into the binary.
    pub fn builtin() -> &'static Profile {
        &PRATHMESH
    }

    pub fn is_last_project(&self, idx: usize) -> bool {
        idx + 1 >= self.projects.len()
    }
}

static PRATHMESH: Profile = Profile {
    name: "Prathmesh",
    role: "Second-year student at Scaler",
    technologies: &["Backend Technologies", "iOS Development"],
    github: "https://www.github.com/bprathmesh",
    email: "prathmesh.23bcs10025@ms.sst.scaler.com",
    hobbies: &["Writing", "Gaming", "Coding"],
    fun_fact: "I once coded for 24 hours straight during a hackathon!",
    projects: &[
        Project {
            name: "Hotel Booking Chatbot",
            url: "https://github.com/Bprathmesh/Hotel_Booking_Bot",
            description: "An intelligent chatbot for hotel bookings using OpenAI's GPT-3.5-turbo.",
            details: &[
                "Created a seamless and interactive user experience from initial inquiry to reservation completion.",
                "Implemented a conversational AI-powered interface for booking.",
                "Designed a multi-step booking process with context retention.",
                "Integrated with external APIs to provide room options and handle bookings.",
                "Ensured robust user input validation and error handling.",
                "Maintained persistent conversation state using a SQLite database.",
            ],
        },
        Project {
            name: "Enhanced Quiz App",
            url: "https://github.com/Bprathmesh/Aaritya-Project",
            description: "A cross-platform Quiz App using Flutter and Dart with a Go backend.",
            details: &[
                "Implemented a modular architecture for enhanced maintainability and scalability.",
                "Utilized Riverpod for state management, ensuring smooth and responsive UI interactions.",
                "Integrated REST APIs for dynamically fetching quiz questions and utilized local storage for offline functionality.",
                "Designed and implemented a hint system and score tracking feature.",
                "Optimized the app's performance with a responsive design.",
            ],
        },
        Project {
            name: "Customised Notification Application Flutter",
            url: "https://github.com/Bprathmesh/Notif-swift",
            description: "A cross-platform Flutter application for iOS, Android, and Web with Firebase integration.",
            details: &[
                "Boosted user engagement by 30% through personalized notifications.",
                "Engineered an advanced notification system with scheduling and dynamic timezone handling.",
                "Designed and implemented an admin panel for user analytics using Firestore.",
                "Integrated multi-language support and dynamic theming.",
                "Optimized app performance with Provider for state management and Firestore streams.",
            ],
        },
    ],
};
