//! Authored page content: sections, methods, plans, articles, FAQ, footer.
//!
//! Everything here is immutable for the lifetime of the page and authored
//! inline; nothing is fetched.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND_MARK: &str = "L&C.";
pub const BRAND_NAME: &str = "Life & Conditioning";
pub const COACH_NAME: &str = "塚越 貴男";
pub const COACH_NAME_LATIN: &str = "Takao Tsukakoshi";
pub const CONTACT_EMAIL: &str = "info@t-conditioning.com";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?auto=format&fit=crop&q=80&w=1200";
pub const PORTRAIT_IMAGE: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=800";

/// In-page navigation targets, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Methods,
    Profile,
    Pricing,
    Articles,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Methods,
        Section::Profile,
        Section::Pricing,
        Section::Articles,
        Section::Faq,
        Section::Contact,
    ];

    /// Element id of the section wrapper.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Methods => "methods",
            Self::Profile => "profile",
            Self::Pricing => "pricing",
            Self::Articles => "articles",
            Self::Faq => "faq",
            Self::Contact => "contact",
        }
    }

    /// Navigation label; the header renders it upper-cased via CSS.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.id()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Method {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Rendered as the highlighted card.
    pub accent: bool,
}

pub const METHODS: &[Method] = &[
    Method {
        id: "analysis",
        title: "Bio-Logic Analysis",
        description: "個々の骨格・神経のクセをミリ単位で解析。現状の『不均衡』を数値化し、改善への地図を描きます。",
        accent: false,
    },
    Method {
        id: "stretch",
        title: "Active Conditioning",
        description: "筋肉の緊張を解くだけでなく、関節の可動域を『正しく使いこなせる』状態へと再編します。",
        accent: false,
    },
    Method {
        id: "performance",
        title: "Dynamic Training",
        description: "整った土台の上で、最小限の努力で最大のパワーを生む動作を習得。ビジネスや競技に直結するキレを定着させます。",
        accent: true,
    },
    Method {
        id: "recovery",
        title: "Cyclic Recovery",
        description: "疲労を『投資』に変える。24時間の代謝サイクルを最適化し、常にエネルギーに満ちた状態を維持します。",
        accent: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Experience", value: "15", suffix: "Years+" },
    Stat { label: "Annual Sessions", value: "1,200", suffix: "+" },
    Stat { label: "Strategy", value: "Custom", suffix: "Tailored" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub price_note: Option<&'static str>,
    pub cta: &'static str,
    /// Dark, bordered premium card.
    pub featured: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        badge: "Trial Session",
        title: "90min Experience",
        description: "現状の身体評価から改善の地図を提示。Wellness Strategyの第一歩を体感ください。",
        price: "¥22,000",
        price_note: Some("(tax inc.)"),
        cta: "体験を予約する",
        featured: false,
    },
    Plan {
        badge: "Premium Membership",
        title: "Custom Plan",
        description: "月4回〜の継続。あなたの人生のパートナーとして、身体とマインドをデザインし続けます。",
        price: "Customized",
        price_note: None,
        cta: "詳細をお問い合わせ",
        featured: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub platform: &'static str,
    /// Authored as `YYYY.MM.DD`.
    pub date: &'static str,
    pub image: &'static str,
}

impl Article {
    /// Date as shown on the card: `2024 / 03 / 10`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.replace('.', " / ")
    }
}

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "「整える」ことから始める、ハイパフォーマンスの作り方",
        platform: "note",
        date: "2024.03.10",
        image: "https://images.unsplash.com/photo-1544367563-12123d8965cd?auto=format&fit=crop&q=80&w=800",
    },
    Article {
        id: 2,
        title: "The Art of Reciprocal Conditioning: Why balance matters.",
        platform: "Medium",
        date: "2024.02.22",
        image: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?auto=format&fit=crop&q=80&w=800",
    },
    Article {
        id: 3,
        title: "経営者が「筋トレ」よりも「ストレッチ」を優先すべき3つの理由",
        platform: "note",
        date: "2024.01.15",
        image: "https://images.unsplash.com/photo-1599058945522-28d584b6f0ff?auto=format&fit=crop&q=80&w=800",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "体験セッションの内容は？",
        answer: "まずは60分のカウンセリングと身体評価を行い、現在の課題を明確にします。その後、残りの30分で実際に身体の変化を体感いただく調整を行います。",
    },
    Faq {
        question: "出張対応エリアを教えてください。",
        answer: "東京都23区内を中心に活動しています。ご自宅やオフィスへの出張が可能です。その他のエリアについても随時ご相談ください。",
    },
    Faq {
        question: "運動不足ですが、大丈夫ですか？",
        answer: "全く問題ありません。私のメソッドは「整える」ことに重点を置いています。あなたの現在の状態に合わせて無理のない範囲からスタートします。",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Instagram", href: "https://instagram.com/tsukakoshi_conditioning" },
    SocialLink { label: "X", href: "https://twitter.com/t_conditioning" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disclaimer {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const DISCLAIMERS: &[Disclaimer] = &[
    Disclaimer {
        heading: "Medical Disclaimer",
        body: "当サービスは医療行為ではなく、疾患の診断や治療を目的としたものではありません。健康状態に不安がある場合は医師にご相談ください。",
    },
    Disclaimer {
        heading: "Result Disclaimer",
        body: "掲載されている成果や体験談は個人の感想であり、結果には個人差があります。全ての方に同様の結果を保証するものではありません。",
    },
    Disclaimer {
        heading: "Privacy & Legal",
        body: "お預かりした個人情報は法令に基づき厳重に管理し、目的外の利用は行いません。当サイトの全コンテンツの著作権はConditioning Designに帰属します。",
    },
];

/// Stagger delay for the `index`-th card in a grid.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}
