use sqlx::PgPool;
use tracing::info;

use crate::auth::password::hash_password;
use crate::auth::repo::User;
use crate::blogs::repo::Blog;

/// Demo data for a fresh database: a few accounts and the launch set of
/// editorial posts. Only runs against empty tables.
pub async fn seed_demo_data(db: &PgPool) -> anyhow::Result<()> {
    let (user_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(db)
        .await?;
    if user_count == 0 {
        info!("seeding demo users");
        let hash = hash_password("password123")?;
        for (first, last, email) in [
            ("John", "Doe", "john@example.com"),
            ("Jane", "Smith", "jane@example.com"),
            ("Admin", "User", "admin@tailark.com"),
        ] {
            User::create(db, first, last, email, &hash).await?;
        }
    }

    if Blog::count(db).await? == 0 {
        info!("seeding demo blogs");
        for post in demo_posts() {
            Blog::create(
                db,
                post.title,
                post.category,
                post.date,
                post.read_time,
                post.image,
                post.content,
            )
            .await?;
        }
    }

    Ok(())
}

struct DemoPost {
    title: &'static str,
    category: &'static str,
    date: &'static str,
    read_time: &'static str,
    image: &'static str,
    content: &'static str,
}

fn demo_posts() -> Vec<DemoPost> {
    vec![
        DemoPost {
            title: "How to Choose the Right Tech Stack for Your Web Application in 2025",
            category: "Startups",
            date: "April 4, 2025",
            read_time: "4 mins read",
            image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1000&auto=format&fit=crop",
            content: "<h1>Choosing the Right Tech Stack</h1><p>In 2025, the landscape of web development has evolved...</p><p>Consider factors like scalability, community support, and performance.</p>",
        },
        DemoPost {
            title: "Software Development Practices in 2025 - A guide to improve your software workflows",
            category: "Development",
            date: "April 3, 2025",
            read_time: "4 mins read",
            image: "https://images.unsplash.com/photo-1635776062127-d379bfcbb9f8?q=80&w=1000&auto=format&fit=crop",
            content: "<h1>Software Development Best Practices</h1><p>Agile, DevOps, and CI/CD are more critical than ever.</p>",
        },
        DemoPost {
            title: "Modern Tech Services: Transforming Businesses for the Digital Age",
            category: "Technology",
            date: "April 3, 2025",
            read_time: "4 mins read",
            image: "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4?q=80&w=1000&auto=format&fit=crop",
            content: "<h1>Digital Transformation</h1><p>How modern services are reshaping traditional business models.</p>",
        },
        DemoPost {
            title: "The Future of AI in SaaS: What to Expect in the Coming Decade",
            category: "AI & Trends",
            date: "April 2, 2025",
            read_time: "6 mins read",
            image: "https://images.unsplash.com/photo-1614850523296-d8c1af93d400?q=80&w=1000&auto=format&fit=crop",
            content: "<h1>AI in SaaS</h1><p>Artificial Intelligence is becoming the backbone of Software as a Service...</p>",
        },
        DemoPost {
            title: "Designing for the Unknown: UI Trends that will Define 2026",
            category: "Design",
            date: "April 1, 2025",
            read_time: "5 mins read",
            image: "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?q=80&w=1000&auto=format&fit=crop",
            content: "<h1>UI Trends for 2026</h1><p>Glassmorphism, Neomorphism, and beyond. Preparing for the next wave of design.</p>",
        },
    ]
}
