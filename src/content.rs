//! Static copy for the page. Everything here is `'static` and read-only.

use crate::icons::Icon;

pub const SITE_TITLE: &str = "The Art of Communication Skills";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const FOUNDATION_PARAGRAPHS: &[&str] = &[
    "Communication is far more than just exchanging words. It's the intricate dance of understanding, empathy, and expression that forms the cornerstone of all human relationships. Whether we're sharing a simple greeting with a stranger or delivering a presentation to hundreds, every interaction is an opportunity to connect, influence, and inspire.",
    "At its core, communication involves a sender, a message, a medium, and a receiver. But the magic happens in the spaces between: the tone, the timing, the context, and the unspoken understanding that transforms mere information into meaningful connection.",
    "Effective communication is both an art and a science. It requires technical knowledge of language and psychology, but also the intuitive understanding of human nature, emotional intelligence, and the ability to adapt to different personalities and situations.",
];

pub struct Pillar {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
    pub tone: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        icon: Icon::Users,
        title: "Connection",
        text: "Building bridges between minds and hearts",
        tone: "blue",
    },
    Pillar {
        icon: Icon::Target,
        title: "Clarity",
        text: "Transforming complex ideas into clear understanding",
        tone: "purple",
    },
    Pillar {
        icon: Icon::Heart,
        title: "Empathy",
        text: "Understanding and sharing others' perspectives",
        tone: "green",
    },
    Pillar {
        icon: Icon::TrendingUp,
        title: "Influence",
        text: "Inspiring action and positive change",
        tone: "orange",
    },
];

pub struct Point {
    pub title: &'static str,
    pub text: &'static str,
}

pub struct ChannelColumn {
    pub icon: Icon,
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [Point],
    pub tone: &'static str,
}

pub const CHANNELS: &[ChannelColumn] = &[
    ChannelColumn {
        icon: Icon::Volume,
        title: "Verbal Communication",
        summary: "Verbal communication encompasses all spoken and written words. It's the conscious, deliberate expression of thoughts, ideas, and emotions through language. This includes not just what we say, but how we say it: our tone, pace, volume, and choice of words.",
        points: &[
            Point {
                title: "Spoken Words",
                text: "Face-to-face conversations, phone calls, presentations, and speeches",
            },
            Point {
                title: "Written Communication",
                text: "Emails, letters, reports, texts, and social media messages",
            },
            Point {
                title: "Vocal Elements",
                text: "Tone, pace, volume, and emphasis that give meaning to words",
            },
        ],
        tone: "blue",
    },
    ChannelColumn {
        icon: Icon::Eye,
        title: "Non-verbal Communication",
        summary: "Non-verbal communication is the silent language that speaks volumes. Research shows that 55% of communication is body language, 38% is tone of voice, and only 7% is actual words. This makes non-verbal cues incredibly powerful in human interaction.",
        points: &[
            Point {
                title: "Body Language",
                text: "Posture, gestures, facial expressions, and physical positioning",
            },
            Point {
                title: "Facial Expressions",
                text: "The universal language of emotions expressed through our faces",
            },
            Point {
                title: "Personal Space",
                text: "Proxemics: how we use space to communicate comfort and boundaries",
            },
        ],
        tone: "purple",
    },
];

pub struct Skill {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub delay: f64,
}

pub const LISTENING_SKILLS: &[Skill] = &[
    Skill {
        icon: Icon::Ear,
        title: "Full Attention",
        description: "Active listening begins with giving your complete, undivided attention to the speaker. This means putting away distractions, making eye contact, and being fully present in the moment.",
        delay: 0.1,
    },
    Skill {
        icon: Icon::Heart,
        title: "Empathetic Understanding",
        description: "Listen not just to the words, but to the emotions, concerns, and needs behind them. Try to understand the speaker's perspective without immediately judging or formulating your response.",
        delay: 0.2,
    },
    Skill {
        icon: Icon::MessageCircle,
        title: "Reflective Responses",
        description: "Show that you're listening by reflecting back what you've heard, asking clarifying questions, and summarizing key points. This confirms understanding and shows respect for the speaker.",
        delay: 0.3,
    },
];

pub struct TimelineStep {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub is_left: bool,
    pub delay: f64,
}

pub const CONFLICT_STEPS: &[TimelineStep] = &[
    TimelineStep {
        icon: Icon::Handshake,
        title: "Acknowledge the Conflict",
        description: "The first step in resolving any conflict is acknowledging that it exists. Avoiding or ignoring conflicts only allows them to fester and grow. Recognition creates the foundation for resolution.",
        is_left: false,
        delay: 0.1,
    },
    TimelineStep {
        icon: Icon::Ear,
        title: "Listen to All Perspectives",
        description: "Give each party the opportunity to share their viewpoint without interruption. Practice active listening to understand not just what is being said, but the emotions and needs underlying the conflict.",
        is_left: true,
        delay: 0.2,
    },
    TimelineStep {
        icon: Icon::Heart,
        title: "Find Common Ground",
        description: "Look for shared values, goals, or interests that both parties can agree upon. This creates a foundation of unity from which to build solutions and reminds everyone of their shared humanity.",
        is_left: false,
        delay: 0.3,
    },
    TimelineStep {
        icon: Icon::Target,
        title: "Focus on Solutions",
        description: "Shift the conversation from blame and past grievances to future-focused problem-solving. Ask 'How can we move forward?' rather than 'Who is at fault?' This redirects energy toward constructive outcomes.",
        is_left: true,
        delay: 0.4,
    },
    TimelineStep {
        icon: Icon::CheckCircle,
        title: "Agree on Next Steps",
        description: "End the resolution process with clear, actionable agreements. Define what each party will do differently and establish follow-up mechanisms to ensure the resolution sticks and relationships are repaired.",
        is_left: false,
        delay: 0.5,
    },
];

#[derive(Debug, PartialEq)]
pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub embed_id: &'static str,
    pub year: &'static str,
    pub duration: &'static str,
}

pub const VIDEOS: &[Video] = &[
    Video {
        id: "jobs",
        title: "Steve Jobs iPhone Launch",
        description: "Experience the historic moment when Steve Jobs introduced the revolutionary iPhone to the world, changing technology forever.",
        embed_id: "MnrJzXM7a6o",
        year: "2007",
        duration: "9:42",
    },
    Video {
        id: "mlk",
        title: "Martin Luther King Jr. - I Have a Dream",
        description: "Witness one of the most powerful speeches in history that inspired millions and changed the course of civil rights.",
        embed_id: "vP4iY1TtS3s",
        year: "1963",
        duration: "17:28",
    },
];

pub const QUOTE: &str = "The art of communication is the language of leadership. When we master our ability to connect with others, we unlock the power to inspire, influence, and create positive change in the world.";
pub const QUOTE_ATTRIBUTION: &str = "- Maya Angelou (adapted)";

pub const CONTACT_EMAIL: &str = "hamzasyrage@gmail.com";
pub const CONTACT_PHONE: &str = "+963 941 845 197";

pub const NEXT_STEPS: &[&str] = &[
    "Practice one skill from this guide daily",
    "Join a local speaking or communication group",
    "Seek feedback from trusted friends or colleagues",
    "Consider professional communication coaching",
];

pub const AUTHORS: &[&str] = &[
    "Hamza Syrage",
    "Nabil Mahmah",
    "Nour Addin Serdar Khan Alafghani",
    "Mohamad Moustafa",
];
