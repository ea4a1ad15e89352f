//! Sample content loaded into a fresh store.
//!
//! The same six posts are seeded on every process start; ids are
//! regenerated each time, timestamps are fixed so the listing order is
//! deterministic.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use quill_core::domain::Post;

fn seeded_at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, day, hour, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

/// The six sample posts. Three are featured.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: Uuid::new_v4(),
            title: "Finding Peace in Mountain Solitude".to_string(),
            content: "Discover how a solo journey through the Alps changed my perspective on life, mindfulness, and the power of disconnecting from the digital world. The mountains have always called to me, but this particular journey was different. It wasn't just about the breathtaking views or the physical challenge – it was about finding something I didn't even know I was looking for.".to_string(),
            excerpt: "Discover how a solo journey through the Alps changed my perspective on life, mindfulness, and the power of disconnecting from the digital world...".to_string(),
            category: "Travel".to_string(),
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500".to_string(),
            author_name: "Sarah Johnson".to_string(),
            author_avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100".to_string(),
            author_bio: Some("Travel Writer".to_string()),
            read_time: 5,
            likes: 42,
            featured: true,
            created_at: seeded_at(20, 10),
        },
        Post {
            id: Uuid::new_v4(),
            title: "Minimalist Design Principles".to_string(),
            content: "Learn how less can be more in creating beautiful, functional spaces that inspire creativity and promote well-being. Minimalism isn't about having less for the sake of it – it's about making room for what truly matters.".to_string(),
            excerpt: "Learn how less can be more in creating beautiful, functional spaces...".to_string(),
            category: "Design".to_string(),
            image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=300".to_string(),
            author_name: "Alex Chen".to_string(),
            author_avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100".to_string(),
            author_bio: Some("Design Director".to_string()),
            read_time: 3,
            likes: 28,
            featured: true,
            created_at: seeded_at(19, 14),
        },
        Post {
            id: Uuid::new_v4(),
            title: "The Future of Remote Work".to_string(),
            content: "Exploring how technology is reshaping the way we work and collaborate across distances. The pandemic accelerated remote work adoption, but what does the future hold for distributed teams?".to_string(),
            excerpt: "Exploring how technology is reshaping the way we work and collaborate...".to_string(),
            category: "Technology".to_string(),
            image_url: "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=300".to_string(),
            author_name: "Mike Rodriguez".to_string(),
            author_avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100".to_string(),
            author_bio: Some("Tech Writer".to_string()),
            read_time: 7,
            likes: 56,
            featured: true,
            created_at: seeded_at(18, 9),
        },
        Post {
            id: Uuid::new_v4(),
            title: "Street Art Renaissance".to_string(),
            content: "How urban artists are transforming city walls into galleries of social commentary and beauty. Street art has evolved from underground rebellion to mainstream recognition.".to_string(),
            excerpt: "How urban artists are transforming city walls into galleries of social commentary and beauty...".to_string(),
            category: "Art".to_string(),
            image_url: "https://images.unsplash.com/photo-1541961017774-22349e4a1262?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=300".to_string(),
            author_name: "Maya Patel".to_string(),
            author_avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100".to_string(),
            author_bio: Some("Art Critic".to_string()),
            read_time: 4,
            likes: 24,
            featured: false,
            created_at: seeded_at(17, 16),
        },
        Post {
            id: Uuid::new_v4(),
            title: "Mindful Living in 2024".to_string(),
            content: "Simple practices to create more presence and intention in your daily routine. In our fast-paced world, mindfulness isn't a luxury – it's a necessity.".to_string(),
            excerpt: "Simple practices to create more presence and intention in your daily routine...".to_string(),
            category: "Wellness".to_string(),
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=300".to_string(),
            author_name: "Emma Davis".to_string(),
            author_avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100".to_string(),
            author_bio: Some("Wellness Coach".to_string()),
            read_time: 6,
            likes: 73,
            featured: false,
            created_at: seeded_at(16, 11),
        },
        Post {
            id: Uuid::new_v4(),
            title: "Seasonal Cooking Guide".to_string(),
            content: "Make the most of spring produce with these fresh and flavorful recipes. Cooking with the seasons connects us to nature and ensures we're eating at peak freshness.".to_string(),
            excerpt: "Make the most of spring produce with these fresh and flavorful recipes...".to_string(),
            category: "Food".to_string(),
            image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=300".to_string(),
            author_name: "Chef Rodriguez".to_string(),
            author_avatar: "https://images.unsplash.com/photo-1540569014015-19a7be504e3a?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100".to_string(),
            author_bio: Some("Culinary Expert".to_string()),
            read_time: 8,
            likes: 18,
            featured: false,
            created_at: seeded_at(15, 13),
        },
    ]
}
