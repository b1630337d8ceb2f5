use crate::models::CategorySources;

// Destination for the downloaded images, relative to the working directory
pub const SERVICES_DIR: &str = "../assets/images/services";

// Output file naming: service_<category>_<index>.jpg
pub const FILE_PREFIX: &str = "service";
pub const FILE_EXTENSION: &str = "jpg";

// Image host query parameters
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_QUALITY: u8 = 80;
pub const DEFAULT_FORMAT: &str = "jpg";
pub const DEFAULT_FIT: &str = "crop";

/// Demonstration images per service category, downloaded in this order.
pub const DEMO_IMAGES: &[CategorySources<'static>] = &[
    CategorySources {
        name: "coiffure",
        urls: &[
            "https://images.unsplash.com/photo-1560869713-da86a9ec0744",
            "https://images.unsplash.com/photo-1562322140-8baeececf3df",
            "https://images.unsplash.com/photo-1595476108010-b4d1f102b1b1",
            "https://images.unsplash.com/photo-1605497788044-5a32c7078486",
            "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e",
        ],
    },
    CategorySources {
        name: "coupe",
        urls: &[
            "https://images.unsplash.com/photo-1622287162716-f311baa1a2b8",
            "https://images.unsplash.com/photo-1634449571010-02389ed0f9b0",
            "https://images.unsplash.com/photo-1599351431202-1e0f0137899a",
        ],
    },
    CategorySources {
        name: "coloration",
        urls: &[
            "https://images.unsplash.com/photo-1617391765934-f7ac7aa648bc",
            "https://images.unsplash.com/photo-1626015365107-476dee3904a6",
            "https://images.unsplash.com/photo-1600948836101-f9ffda59d250",
        ],
    },
    CategorySources {
        name: "soin",
        urls: &[
            "https://images.unsplash.com/photo-1616394584738-fc6e612e71b9",
            "https://images.unsplash.com/photo-1570172619644-dfd03ed5d881",
            "https://images.unsplash.com/photo-1632345031435-8727f6897d53",
        ],
    },
];
