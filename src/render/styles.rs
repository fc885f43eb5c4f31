//! Embedded stylesheets.
//!
//! Marketplace description fields strip external stylesheets, so every rule
//! ships inline with the fragment. The breakpoint cascade (1200 / 1024 / 768 /
//! 600 / 480 / 360 px) is fixed; nothing here is computed.

/// Feature grid: circular thumbnails shrinking per breakpoint.
pub const FEATURE_GRID_CSS: &str = r#"<style>
    .feature-images-container {
        width: 100%;
        margin: 20px 0;
        padding: 0;
        text-align: center;
    }

    .feature-images-table {
        border-collapse: collapse;
        width: 100%;
        margin: 0 auto;
        table-layout: fixed;
    }

    .feature-img-cell {
        padding: 12px;
        vertical-align: top;
    }

    .feature-img-cell img {
        width: 220px;
        height: 220px;
        object-fit: cover;
        border-radius: 50%;
        border: 1px solid #eee;
        display: block;
        margin: 0 auto 8px;
        transition: 0.3s ease-in-out;
    }

    /** Large Tablets **/
    @media (max-width: 1200px) {
        .feature-img-cell img { width: 200px; height: 200px; }
    }

    /** Tablets **/
    @media (max-width: 1024px) {
        .feature-img-cell img { width: 170px; height: 170px; }
        .feature-img-cell { padding: 10px !important; }
    }

    /** Small Tablets & Large Phones **/
    @media (max-width: 768px) {
        .feature-img-cell img { width: 140px; height: 140px; }
        .feature-img-cell { padding: 8px !important; }
    }

    /** Mobile Phones **/
    @media (max-width: 600px) {
        .feature-img-cell img { width: 120px; height: 120px; }
    }

    /** Small Mobiles 480px and below **/
    @media (max-width: 480px) {
        .feature-img-cell img { width: 95px; height: 95px; }
        .feature-img-cell { padding: 6px !important; }
        .feature-img-cell p { font-size: 12px !important; }
    }

    /** Extra Small Mobiles 360px **/
    @media (max-width: 360px) {
        .feature-img-cell img { width: 80px; height: 80px; }
        .feature-img-cell p { font-size: 10px !important; }
    }
</style>"#;

/// Comparison description paragraph and the black brand bar.
pub const COMPARISON_HEADER_CSS: &str = r#"<style>
        .comparison-description {
            width: 100%;
            max-width: 100%;
            margin: 20px 0;
            padding: 20px 0;
            text-align: center;
            background-color: rgba(0, 0, 0, 0.02);
        }

        .comparison-description p {
            margin: 0;
            padding: 0;
            font-size: 24px;
            font-weight: bold;
            color: #000000;
            line-height: 1.4;
            font-family: 'Verdana', sans-serif;
            text-align: center;
        }

        .comparison-brand-bar {
            width: 95%;
            background-color: #000000;
            padding: 10px 0;
            margin: 0px auto;
            text-align: center;
        }

        .comparison-brand-bar p {
            margin: 0;
            padding: 0;
            font-size: 20px;
            font-weight: bold;
            color: #ffffff;
            text-transform: uppercase;
            letter-spacing: 2px;
            font-family: 'Verdana', sans-serif;
        }

        /* Responsive styles for tablets */
        @media (max-width: 1024px) {
            .comparison-description { padding: 15px 0; }
            .comparison-description p { font-size: 20px; }
            .comparison-brand-bar { padding: 12px 0; }
            .comparison-brand-bar p { font-size: 18px; letter-spacing: 1.5px; }
        }

        /* Responsive styles for mobile phones */
        @media (max-width: 768px) {
            .comparison-description { padding: 12px 0; margin: 15px 0; }
            .comparison-description p { font-size: 18px; line-height: 1.3; }
            .comparison-brand-bar { padding: 10px 0; }
            .comparison-brand-bar p { font-size: 16px; letter-spacing: 1px; }
        }

        /* Responsive styles for small mobiles */
        @media (max-width: 480px) {
            .comparison-description { padding: 10px 0; margin: 10px 0; }
            .comparison-description p { font-size: 16px; line-height: 1.2; }
            .comparison-brand-bar { padding: 8px 0; }
            .comparison-brand-bar p { font-size: 14px; letter-spacing: 0.5px; }
        }
    </style>"#;

/// Comparison table: scrollable wrapper, header cards, label/value cells.
pub const COMPARISON_TABLE_CSS: &str = r#"<style>
        .comparison-table-wrapper {
            width: 100%;
            margin: 0 auto;
            padding: 0;
            text-align: center;
            overflow-x: auto;
            font-family: 'Verdana', sans-serif;
            -webkit-overflow-scrolling: touch;
        }

        .comparison-table {
            border-collapse: collapse;
            font-family: 'Verdana', sans-serif;
            font-size: 14px;
            text-align: center;
            width: 100%;
            margin: 0 auto;
            padding: 0;
            min-width: 600px;
        }

        .comparison-table td {
            word-wrap: break-word;
            overflow-wrap: break-word;
        }

        .comparison-header-cell {
            padding: 20px 10px;
            vertical-align: top;
        }

        .comparison-header-cell img {
            width: 100%;
            max-width: 180px;
            height: 180px;
            object-fit: contain;
            border-radius: 6px;
            border: 1px solid #eee;
        }

        .comparison-header-cell p {
            margin: 0 auto;
            padding: 10px 0;
            font-size: 14px;
            color: #000000;
            text-align: center;
            line-height: 1.2;
            height: 50px;
            overflow: hidden;
        }

        .comparison-header-cell button {
            background: #008bfd;
            border: none;
            padding: 8px 12px;
            color: white;
            border-radius: 6px;
            cursor: pointer;
            font-weight: bold;
            font-size: 12px;
            width: 100%;
        }

        .comparison-row-label {
            padding: 10px;
            font-weight: bold;
            text-align: left;
            background: #f9f9f9;
        }

        .comparison-row-cell {
            padding: 10px;
        }

        /* Responsive styles for tablets */
        @media (max-width: 1024px) {
            .comparison-table { min-width: 500px; font-size: 13px; }
            .comparison-header-cell { padding: 15px 8px; }
            .comparison-header-cell img { max-width: 150px; height: 150px; }
            .comparison-header-cell p { font-size: 13px; height: 45px; }
            .comparison-header-cell button { padding: 6px 10px; font-size: 11px; }
            .comparison-row-label,
            .comparison-row-cell { padding: 8px; font-size: 13px; }
        }

        /* Responsive styles for small tablets and large phones */
        @media (max-width: 768px) {
            .comparison-table { min-width: 450px; font-size: 12px; }
            .comparison-header-cell { padding: 12px 6px; }
            .comparison-header-cell img { max-width: 120px; height: 120px; }
            .comparison-header-cell p { font-size: 12px; height: 40px; padding: 8px 0; }
            .comparison-header-cell button { padding: 6px 8px; font-size: 10px; }
            .comparison-row-label,
            .comparison-row-cell { padding: 6px; font-size: 12px; }
        }

        /* Responsive styles for mobile phones */
        @media (max-width: 600px) {
            .comparison-table { min-width: 400px; font-size: 11px; }
            .comparison-header-cell { padding: 10px 5px; }
            .comparison-header-cell img { max-width: 100px; height: 100px; }
            .comparison-header-cell p { font-size: 11px; height: 35px; padding: 6px 0; }
            .comparison-header-cell button { padding: 5px 6px; font-size: 9px; }
            .comparison-row-label,
            .comparison-row-cell { padding: 5px; font-size: 11px; }
        }

        /* Responsive styles for small mobiles */
        @media (max-width: 480px) {
            .comparison-table { min-width: 350px; font-size: 10px; }
            .comparison-header-cell { padding: 8px 4px; }
            .comparison-header-cell img { max-width: 80px; height: 80px; }
            .comparison-header-cell p { font-size: 10px; height: 30px; padding: 5px 0; }
            .comparison-header-cell button { padding: 4px 5px; font-size: 8px; }
            .comparison-row-label,
            .comparison-row-cell { padding: 4px; font-size: 10px; }
        }

        /* Responsive styles for extra small mobiles */
        @media (max-width: 360px) {
            .comparison-table { min-width: 300px; font-size: 9px; }
            .comparison-header-cell img { max-width: 70px; height: 70px; }
            .comparison-header-cell p { font-size: 9px; height: 25px; }
            .comparison-header-cell button { padding: 3px 4px; font-size: 7px; }
            .comparison-row-label,
            .comparison-row-cell { padding: 3px; font-size: 9px; }
        }
    </style>"#;
