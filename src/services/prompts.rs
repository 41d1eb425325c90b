// src/services/prompts.rs

use crate::models::generate::ProductCategory;

// Roteiro de cada tipo de conteúdo: quem o modelo "é", o nome do
// documento e as seções que ele deve conter.
struct ContentBrief {
    role: &'static str,
    document: &'static str,
    sections: &'static [&'static str],
}

const TEMPLATE_GUIDE: &str = "テンプレートガイド";

fn brief(category: ProductCategory) -> ContentBrief {
    use ProductCategory::*;

    match category {
        Prompt => ContentBrief {
            role: "あなたはAIプロンプトの専門家です。以下の商品情報に基づいて、実際に販売できるプロンプト集を作成してください。",
            document: "プロンプト集",
            sections: &[
                "タイトルと目次",
                "はじめに（使い方説明）",
                "各章に10個ずつのプロンプト（合計50個）",
                "プロンプトは実際にコピペして使える形式で",
                "各プロンプトに「使い方のコツ」を1行追加",
            ],
        },
        Ebook => ContentBrief {
            role: "あなたはベストセラー作家です。以下の商品情報に基づいて、電子書籍のコンテンツを作成してください。",
            document: "電子書籍",
            sections: &[
                "タイトルページ",
                "目次（5〜7章）",
                "はじめに",
                "各章の本文（各章1000文字程度）",
                "まとめ・あとがき",
            ],
        },
        Checklist => ContentBrief {
            role: "あなたは生産性向上の専門家です。以下の商品情報に基づいて、チェックリスト/ワークシートを作成してください。",
            document: "チェックリスト",
            sections: &[
                "タイトルと概要",
                "使い方ガイド",
                "メインチェックリスト（20〜30項目）",
                "サブチェックリスト（カテゴリ別に3〜5セット）",
                "振り返りシート",
            ],
        },
        Course => ContentBrief {
            role: "あなたはオンライン講師です。以下の商品情報に基づいて、オンラインコースのカリキュラムと講義スクリプトを作成してください。",
            document: "コース教材",
            sections: &[
                "コース概要と学習目標",
                "カリキュラム（5〜7モジュール）",
                "各モジュールの講義スクリプト（各1500文字程度）",
                "演習問題とワーク",
                "まとめと次のステップ",
            ],
        },
        Notion => ContentBrief {
            role: "あなたはNotionテンプレートの専門家です。以下の商品情報に基づいて、Notionテンプレートの構成案と使い方ガイドを作成してください。",
            document: TEMPLATE_GUIDE,
            sections: &[
                "テンプレート概要",
                "データベース構成（プロパティ一覧、ビュー設定）",
                "ページ構成（各ページの役割と使い方）",
                "使い方ガイド（ステップバイステップ）",
                "カスタマイズのヒント",
                "FAQ",
            ],
        },
        Excel => ContentBrief {
            role: "あなたはExcelの専門家です。以下の商品情報に基づいて、Excelテンプレートの構成案と使い方ガイドを作成してください。",
            document: TEMPLATE_GUIDE,
            sections: SHEET_SECTIONS,
        },
        Spreadsheet => ContentBrief {
            role: "あなたはGoogleスプレッドシートの専門家です。以下の商品情報に基づいて、スプレッドシートテンプレートの構成案と使い方ガイドを作成してください。",
            document: TEMPLATE_GUIDE,
            sections: SHEET_SECTIONS,
        },
        Powerpoint => ContentBrief {
            role: "あなたはプレゼンテーションの専門家です。以下の商品情報に基づいて、PowerPointテンプレートの構成案とスライド原稿を作成してください。",
            document: TEMPLATE_GUIDE,
            sections: &[
                "テンプレート概要とデザインコンセプト",
                "スライド構成（各スライドの役割）",
                "各スライドの原稿テキスト",
                "使い方ガイド",
                "カスタマイズのヒント",
            ],
        },
        Canva => ContentBrief {
            role: "あなたはCanvaデザインの専門家です。以下の商品情報に基づいて、Canvaテンプレートの構成案とデザインガイドを作成してください。",
            document: TEMPLATE_GUIDE,
            sections: &[
                "テンプレート概要とデザインコンセプト",
                "テンプレート構成（各デザインの用途）",
                "カラーパレットとフォント設定",
                "使い方ガイド（Canvaでの編集方法）",
                "カスタマイズのヒント",
                "活用例",
            ],
        },
        Figma => ContentBrief {
            role: "あなたはFigmaデザインの専門家です。以下の商品情報に基づいて、Figmaテンプレートの構成案とデザインシステムを作成してください。",
            document: TEMPLATE_GUIDE,
            sections: &[
                "テンプレート概要とデザインコンセプト",
                "コンポーネント構成",
                "デザイントークン（色、タイポグラフィ、スペーシング）",
                "使い方ガイド",
                "カスタマイズ方法",
            ],
        },
        Linestamp => ContentBrief {
            role: "あなたはLINEスタンプクリエイターです。以下の商品情報に基づいて、LINEスタンプのキャラクター設定とセリフ案を作成してください。",
            document: "スタンプ企画書",
            sections: &[
                "スタンプセット概要",
                "キャラクター設定（外見、性格、特徴）",
                "スタンプ40個分のセリフ・表情一覧",
                "使用シーン例",
                "制作時の注意点",
            ],
        },
        Icon => ContentBrief {
            role: "あなたはアイコンデザイナーです。以下の商品情報に基づいて、アイコンセットのデザイン仕様書を作成してください。",
            document: "デザイン仕様書",
            sections: &[
                "アイコンセット概要とコンセプト",
                "デザインスタイルガイド",
                "アイコン50個分の一覧（名前と用途）",
                "サイズバリエーション",
                "使用ガイドライン",
            ],
        },
    }
}

// Excel e Google Sheets pedem a mesma estrutura
const SHEET_SECTIONS: &[&str] = &[
    "テンプレート概要",
    "シート構成（各シートの役割）",
    "入力項目一覧と計算式の説明",
    "使い方ガイド（ステップバイステップ）",
    "カスタマイズ方法",
    "よくある質問",
];

/// Prompt do conteúdo completo (Markdown) enviado ao Gemini.
pub fn content_prompt(
    category: ProductCategory,
    product_name: &str,
    target: &str,
    additional_notes: Option<&str>,
) -> String {
    let brief = brief(category);
    let notes = match additional_notes {
        Some(n) if !n.is_empty() => format!("【追加要望】{n}"),
        _ => String::new(),
    };

    let mut prompt = format!(
        "{role}\n\n【商品名】{product_name}\n【ターゲット】{target}\n{notes}\n\n以下の形式でマークダウン形式の{doc}を作成してください：\n\n",
        role = brief.role,
        doc = brief.document,
    );
    for (i, section) in brief.sections.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, section));
    }
    prompt.push_str(&format!(
        "\n【出力】\nマークダウン形式の{}本文のみを出力してください。",
        brief.document
    ));

    prompt
}

/// Prompt da proposta de produto (nomes, descrição, preço, tags) enviado ao Claude.
pub fn product_prompt(category: ProductCategory, target: &str, additional_notes: Option<&str>) -> String {
    let (price_min, price_max) = category.price_range();
    let notes = match additional_notes {
        Some(n) if !n.is_empty() => format!("追加の要望: {n}"),
        _ => String::new(),
    };

    format!(
        r#"あなたはデジタル商品販売の専門家です。Gumroadで売れる商品を提案してください。

カテゴリ: {label}
ターゲット: {target}
{notes}

以下の形式でJSON形式で出力してください（説明文は日本語で）:
{{
  "productNames": ["商品名1", "商品名2", "商品名3"],
  "description": "購買意欲を刺激する200-300文字の商品説明文",
  "suggestedPrice": {price_min}から{price_max}の間の価格（整数）,
  "tags": ["タグ1", "タグ2", "タグ3", "タグ4", "タグ5"]
}}

重要:
- 商品名はキャッチーで検索されやすいものにする
- 説明文は購入者のベネフィットを明確にする
- タグは検索で見つかりやすいキーワードを選ぶ
- JSONのみを出力し、他の説明は不要"#,
        label = category.label(),
    )
}
