/// Channels polled for new shorts, in fetch order. At most one video is
/// ingested per channel per run; list order decides who gets in first on
/// days the daily cap fills up.
pub const CHANNELS: &[&str] = &[
    "UC-v_CmOijyT8QVWq9H_1qfg", // AuraForge
    "UCZE_XnY_UazcRILVru7znDw", // Khalid Al Ameri
    "UChOPyo-uWLVi5uO53mSBX-w", // Noor Stars
    "UCwBGFE-r7YeFFHT7JmxWPgg", // Ossy Marwah
    "UCWKF7jRIPLVBcnE2p993yAg", // Bessan Ismail
    "UCdcZhYtGKo8n1VRLgxMe_hA", // Kika Kim
    "UCYJHVw7OYgtwiNks92eag5Q", // simba17 official
    "UCFGZTrhn2GbEsgQ8-12-rIA", // Ghaith Marwan
    "UCoWHUkZf4bATsTlnqcNVPfw", // Bjlife
    "UCxEGVXh6fi-XYo58NZrbIHQ", // BanderitaX
    "UC9Z-zmiY4J3KGe_aNPATSeA", // Basma if
    "UCXnKd1R2a7ebk6hvIzS57WA", // Osama
    "UCVEvXfblll0OjxBE_I9YeOw", // Karadenizli Maceracı
    "UCTO40euu-crofOMmL3SULqg", // CHICKEN BALALM
    "UC0fvGpDXi7sV2hbgD-O47yw", // Amaury Guichon
    "UC7Vr_TnuV66BKKHQ5qOsUKA", // Yasser Ahmed
    "UCXxjVrHdBLJV0EhOczWTw0g", // Low Budget Ball
    "UC7108gLyg2hCacGQtH3UqZQ", // Stillworse
    "UCm_K3dRBOVt3rHLtPsjVSjA", // Marc Ruiz
    "UCrw49J13uH1oElsUC3q_1pw", // N
    "UChHje2tB0q8m-kCaNdJVDmA", // Hdit W Kora
    "UCkwICkGluKZ8ZJVVQFQ-pdQ", // abdel abdou
    "UCjDeNOJxVmNTlP2AfAfPzbw", // Ali ball
    "UCvQ0oz1NhZZU7-LC8z7KGuA", // Dm football
    "UC2bW_AY9BlbYLGJSXAbjS4Q", // Live Speedy
    "UCU8bQExxd38i-mnn-GLOtfA", // UFC Eurasia
    "UCGmnsW623G1r-Chmo5RB4Yw", // JJ Olatunji
    "UCmf_VrB73I-eJ3fq0adaOkg", // mkbHD
    "UCMiJRAwDNSNzuYeN2uWa0pA", // Mrwhosetheboss
    "UCdqs-ItofPRWvLm3mM1dNlg", // TechDroider
    "UCtxD0x6AuNNqdXO9Wp5GHew", // URCristiano
    "UC5CA3F_2LalVkbYpJq3MGhw", // Naifh Alehydeb
    "UCvPW1W4WlpTgNezZzwIstLA", // Nogla
    "UC0Wju2yvRlfwqraLlz5152Q", // PANDA BOI
    "UCcveFkjpctOZwCsfp5hVLyg", // ZachChoi
    "UCmoMmj6q312Grl9zN-0z65g", // candy
    "UCjdrGjv4bGt5HvApBe1HADQ", // EBB Super Star
    "UCdN6LdWhEyiA2u7LPonxz9Q", // Real Aryan khan
    "UCaFUrR3oSxOl5Y9y6tvLTEg", // WillNE
    "UC0DRTkIeQW27Lk4h1tkc6ew", // Elias Dosunmu
];
