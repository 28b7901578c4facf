//! Static page copy

pub const BRAND: &str = "ARCHV";
pub const FOOTER_RIGHT: &str = "design iteration 2";

pub mod home {
    pub const TITLE: &str = "Archv AI Platform";
    pub const INTRO: &str = "Calm software for real work—private by default, simple to run, and designed to make teams faster without the drama.";
}

pub mod platform {
    pub const TITLE: &str = "Archv AI Platform";
    pub const INTRO: &str = "Calm software for real work—private by default, simple to run, and designed to make teams faster without the drama.";
    pub const FEATURES: &[&str] = &[
        "Private by default",
        "Fast, simple answers",
        "Auditable sources",
        "Fits your stack",
    ];
    pub const CTA: &str = "See a short demo ↗";
    pub const PHRASES: &[&str] = &[
        "Optimize the work, not the noise. — Archv",
        "Security without slowdown. — Archv",
        "Private by default. — Archv",
        "Safer by design. — Archv",
        "More efficient teams, fewer tabs. — Archv",
    ];
    pub const INTERVAL_MS: u64 = 2600;
    /// Ghost layers before and after the phrase swap
    pub const GLITCH_BEFORE_MS: u64 = 150;
    pub const GLITCH_AFTER_MS: u64 = 170;
    pub const SPECS: &[(&str, &str)] = &[
        ("Deploy", "Cloud or your VPC"),
        ("Identity", "SSO · simple roles"),
        ("Exports", "Answers with sources"),
        ("Support", "Plain language, real docs"),
    ];
}

pub mod security {
    pub const STATEMENT: &str = "TRUST WITHOUT DRAMA";
    pub const STATEMENT_MS: u64 = 2000;
    pub const STATEMENT_SHIFT: u32 = 60;
    pub const LEAD: &str = "Your content stays yours. Clear controls. Predictable results.";
    pub const KINETIC_LINE: &str = "ARCHV • AI • TRUST";
    /// Scan bar under the kinetic line: track cells, lit cells, sweep time
    pub const SCAN_TRACK: usize = 24;
    pub const SCAN_WIDTH: usize = 4;
    pub const SCAN_MS: u64 = 1800;
    pub const RAIL: &[(&str, &str)] = &[
        ("Data", "You own it · export · delete"),
        ("Access", "SSO · roles · least-priv"),
        ("Storage", "Encrypted at rest & in transit"),
        ("Retention", "You set how long"),
        ("Export / Delete", "Plain controls · no surprises"),
    ];
    pub const ENVIRONMENT: &str = "Cloud or your VPC";
    pub const CARDS: &[(&str, &[&str])] = &[
        (
            "Data",
            &["You own your data.", "Not used to train models.", "Export or delete on request."],
        ),
        (
            "Access",
            &["SSO & simple roles.", "Least-privilege by default.", "Clean, readable logs."],
        ),
        (
            "Protection",
            &["Encrypted in transit & at rest.", "Backups & key rotation.", "Region aware."],
        ),
    ];
    pub const CONTROLS: &[&str] = &[
        "SSO",
        "RBAC",
        "Audit Log",
        "KMS / Keys",
        "Backups",
        "Data Residency",
        "Export",
        "Deletion",
    ];
    pub const LEDGER: &[(&str, &str)] = &[
        ("Retention", "You choose how long to keep. Default is minimal."),
        ("Sharing", "Nothing shared unless you choose it. No surprises."),
        ("Models", "Use ours or yours. Same guardrails either way."),
        ("Reviews", "Quick exports for legal or security checks."),
    ];
    pub const CTA: &str = "Request security brief ↗";
    pub const CTA_NOTE: &str = "One page. Plain language.";
}

pub mod philosophy {
    pub const TITLE: &str = "ARCHV — Philosophy";
    pub const MOTTO: &str = "Simple • Quiet • True";
    pub const MOTTO_MS: u64 = 900;
    pub const MOTTO_SHIFT: u32 = 50;
    pub const INDEX: &[&str] = &[
        "Simplicity",
        "Clarity",
        "Respect",
        "Quality",
        "Receipts",
        "Calm UI",
        "Good defaults",
        "Privacy-first",
    ];
    pub const NOTES: &[&str] = &[
        "We design for calm: fewer choices, better defaults, motion only when it helps.",
        "Our product shouldn’t shout. Your work is the headline.",
    ];
    pub const QUOTES: &[&str] = &[
        "We fix the messy parts so teams can think.",
        "We remove friction so good work moves faster.",
        "We turn noise into simple, useful answers.",
    ];
    pub const QUOTE_INTERVAL_MS: u64 = 10_000;
    pub const QUOTE_FADE_OUT_MS: u64 = 250;
    pub const QUOTE_FADE_IN_MS: u64 = 300;
    pub const BLOCKS: &[(&str, &str)] = &[
        ("Tone", "Plain. Considerate. Evidence-led. No fluff."),
        ("Pace", "Small, steady releases. Real docs. Rollback > heroics."),
        ("Trust", "Clear permissions. Answers with sources. Your data stays yours."),
    ];
    pub const LEDGER: &[(&str, &str)] = &[
        ("Scope", "Do less, do it well."),
        ("Defaults", "Safe, quiet, reversible."),
        ("Failure", "Make it visible, make it recoverable."),
        ("Credit", "Credit the team, not the tool."),
    ];
    pub const CTA: &str = "Talk to Archv ↗";
}

pub mod contact {
    pub const TITLE: &str = "ARCHV.CONTACT";
    pub const INQUIRY: &str = "We’re interested in becoming a client. Could we schedule a call and a short demo (Zoom or in-person)? Please also share indicative pricing/tiers for a 30-day pilot. Thanks.";
    pub const DECODE_MS: u64 = 900;
    pub const MATRIX_ROWS: usize = 8;
    pub const MATRIX_COLS: usize = 44;
    pub const MATRIX_FLIPS: usize = 22;
    pub const MATRIX_JITTER_MS: u64 = 70;
    /// The matrix dims once the decode has had time to land
    pub const MATRIX_FADE_DELAY_MS: u64 = 1400;
    pub const MATRIX_FADE_MS: u64 = 700;
    pub const MATRIX_FADE_FLOOR: f64 = 0.25;
    pub const TAGLINE: &str = "Think more. Design less.";
    pub const BODY: &str = "We keep contact simple: one inbox, real answers, no sales theatre. Share a goal, a problem, a constraint—whatever helps us start from truth. If we can’t help, we’ll say so and point you somewhere that can.";
    pub const PILLS: &[&str] = &["Context", "Constraints", "Timeline"];
    pub const CARDS: &[(&str, &str, &str)] = &[
        (
            "Schedule a call / demo",
            "Interested in becoming a client? We can meet on Zoom or in-person. Share a few time windows and we’ll book it.",
            "Schedule call / demo ↗",
        ),
        (
            "Pricing & tiers",
            "We keep pricing transparent. Tell us scope, team size, and timing; we’ll send clear tiers and next steps.",
            "Ask for pricing ↗",
        ),
    ];
    pub const EMAIL: &str = "hello@archv.ai";
}

pub mod login {
    pub const TITLE: &str = "Sign in";
    pub const LEAD: &str = "Use your Archv account to access the platform.";
    pub const PORTAL: &str = "Continue to login portal ↗";
    pub const HELP: &str = "Need access?";
    pub const PHRASES: &[&str] = &[
        "Ready to Archv with us today?",
        "오늘 우리와 함께 Archv 하실 준비 되셨나요?",
        "今日は一緒に Archv しませんか？",
        "¿Listo para Archv con nosotros hoy?",
        "Prêt à Archv avec nous aujourd’hui ?",
        "Bereit, heute mit uns zu Archv’n?",
        "Pronto per Archv con noi oggi?",
        "Pronto para Archv conosco hoje?",
        "今天准备好与我们一起 Archv 吗？",
        "هل أنت مستعد للـ Archv معنا اليوم؟",
    ];
    pub const INTERVAL_MS: u64 = 4200;
}
