// src/services/sales_aggregator.rs

use std::collections::{BTreeMap, HashMap};

use chrono::{Days, NaiveDate};

use crate::models::sales::{DailySales, DashboardSummary, ProductSales, SaleRecord};

// Quantidade de dias exibidos no gráfico quando não há dados reais
pub const MOCK_WINDOW_DAYS: u64 = 14;

// Tamanho do prefixo "YYYY-MM-DD" usado como chave do dia
const DAY_KEY_LEN: usize = 10;

/// Agrega as vendas do mês em totais, ranking por produto e série diária.
///
/// Nunca falha: registros malformados já chegam com valores padrão
/// (preço 0, nome "Unknown", data vazia) e entram na conta normalmente.
pub fn aggregate(records: &[SaleRecord], monthly_goal: i64) -> DashboardSummary {
    let mut total_revenue = 0_i64;

    // Ordem de primeira aparição preservada para o desempate do sort estável
    let mut products: Vec<ProductSales> = Vec::new();
    let mut product_index: HashMap<&str, usize> = HashMap::new();
    let mut daily: BTreeMap<String, i64> = BTreeMap::new();

    // Soma saturada: valores absurdos da origem não derrubam a agregação
    for record in records {
        let price = record.price_minor_units;
        total_revenue = total_revenue.saturating_add(price);

        let idx = *product_index
            .entry(record.product_name.as_str())
            .or_insert_with(|| {
                products.push(ProductSales {
                    product_name: record.product_name.clone(),
                    count: 0,
                    revenue: 0,
                });
                products.len() - 1
            });
        products[idx].count += 1;
        products[idx].revenue = products[idx].revenue.saturating_add(price);

        let day = daily.entry(day_key(&record.created_at)).or_insert(0);
        *day = day.saturating_add(price);
    }

    // sort_by é estável: empates mantêm a ordem de primeira aparição
    products.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    let daily_sales = daily
        .into_iter()
        .map(|(date, revenue)| DailySales { date, revenue })
        .collect();

    DashboardSummary {
        total_sales: records.len() as i64,
        total_revenue,
        monthly_goal,
        sales_by_product: products,
        daily_sales,
    }
}

/// Resumo vazio com os últimos 14 dias zerados (mais antigo primeiro).
/// Usado quando não há token ou a Gumroad falhou.
pub fn mock_summary(monthly_goal: i64, today: NaiveDate) -> DashboardSummary {
    let daily_sales = (0..MOCK_WINDOW_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| DailySales {
            date: date.format("%Y-%m-%d").to_string(),
            revenue: 0,
        })
        .collect();

    DashboardSummary {
        total_sales: 0,
        total_revenue: 0,
        monthly_goal,
        sales_by_product: Vec::new(),
        daily_sales,
    }
}

// Corte por caracteres (não bytes); strings curtas viram chave parcial
fn day_key(created_at: &str) -> String {
    created_at.chars().take(DAY_KEY_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(name: &str, price: i64, created_at: &str) -> SaleRecord {
        SaleRecord {
            product_name: name.to_string(),
            price_minor_units: price,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_aggregate_example_month() {
        let records = vec![
            sale("A", 1000, "2024-01-05T10:00:00"),
            sale("A", 500, "2024-01-05T11:00:00"),
            sale("B", 2000, "2024-01-06T09:00:00"),
        ];

        let summary = aggregate(&records, 100_000);

        assert_eq!(summary.total_sales, 3);
        assert_eq!(summary.total_revenue, 3500);
        assert_eq!(summary.monthly_goal, 100_000);
        assert_eq!(
            summary.sales_by_product,
            vec![
                ProductSales { product_name: "B".into(), count: 1, revenue: 2000 },
                ProductSales { product_name: "A".into(), count: 2, revenue: 1500 },
            ]
        );
        assert_eq!(
            summary.daily_sales,
            vec![
                DailySales { date: "2024-01-05".into(), revenue: 1500 },
                DailySales { date: "2024-01-06".into(), revenue: 2000 },
            ]
        );
    }

    #[test]
    fn test_aggregate_empty_input() {
        let summary = aggregate(&[], -5);
        assert_eq!(summary.total_sales, 0);
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.monthly_goal, -5);
        assert!(summary.sales_by_product.is_empty());
        assert!(summary.daily_sales.is_empty());
    }

    #[test]
    fn test_rollups_sum_to_totals() {
        let records = vec![
            sale("Notion家計簿", 1500, "2024-03-01T00:00:00Z"),
            sale("プロンプト集", 0, "2024-03-02T08:00:00Z"),
            sale("Unknown", 980, ""),
            sale("Notion家計簿", 1500, "2024-03-01T22:10:00Z"),
            sale("Canva素材", 720, "2024-03"),
        ];

        let summary = aggregate(&records, 0);

        let expected: i64 = records.iter().map(|r| r.price_minor_units).sum();
        assert_eq!(summary.total_revenue, expected);
        assert_eq!(summary.total_sales, records.len() as i64);

        let by_product: i64 = summary.sales_by_product.iter().map(|p| p.revenue).sum();
        let by_count: i64 = summary.sales_by_product.iter().map(|p| p.count).sum();
        let by_day: i64 = summary.daily_sales.iter().map(|d| d.revenue).sum();
        assert_eq!(by_product, summary.total_revenue);
        assert_eq!(by_count, summary.total_sales);
        assert_eq!(by_day, summary.total_revenue);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            sale("C", 300, "2024-01-01"),
            sale("A", 500, "2024-01-01"),
            sale("B", 300, "2024-01-02"),
            sale("D", 300, "2024-01-02"),
        ];

        let summary = aggregate(&records, 0);
        let names: Vec<&str> = summary
            .sales_by_product
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_daily_sales_sorted_by_date() {
        let records = vec![
            sale("A", 1, "2024-01-20T00:00:00"),
            sale("A", 2, "2024-01-03T00:00:00"),
            sale("A", 3, "2024-01-11T00:00:00"),
        ];

        let summary = aggregate(&records, 0);
        let dates: Vec<&str> = summary.daily_sales.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-03", "2024-01-11", "2024-01-20"]);
    }

    #[test]
    fn test_short_and_empty_dates_bucket_by_prefix() {
        let records = vec![
            sale("A", 100, ""),
            sale("A", 200, "2024-01"),
            sale("A", 300, ""),
        ];

        let summary = aggregate(&records, 0);
        assert_eq!(
            summary.daily_sales,
            vec![
                DailySales { date: "".into(), revenue: 400 },
                DailySales { date: "2024-01".into(), revenue: 200 },
            ]
        );
    }

    #[test]
    fn test_duplicates_are_counted_twice() {
        let record = sale("A", 1000, "2024-01-05T10:00:00");
        let summary = aggregate(&[record.clone(), record], 0);
        assert_eq!(summary.total_sales, 2);
        assert_eq!(summary.total_revenue, 2000);
        assert_eq!(summary.sales_by_product[0].count, 2);
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_overflowing() {
        // Dois preços perto de i64::MAX: a soma satura em vez de estourar
        let records = [
            sale("A", 9_000_000_000_000_000_000, "2024-01-05T10:00:00"),
            sale("A", 9_000_000_000_000_000_000, "2024-01-05T11:00:00"),
            sale("B", 500, "2024-01-06T10:00:00"),
        ];
        let summary = aggregate(&records, 0);

        assert_eq!(summary.total_sales, 3);
        assert_eq!(summary.total_revenue, i64::MAX);
        assert_eq!(summary.sales_by_product[0].product_name, "A");
        assert_eq!(summary.sales_by_product[0].count, 2);
        assert_eq!(summary.sales_by_product[0].revenue, i64::MAX);
        assert_eq!(summary.daily_sales[0].revenue, i64::MAX);
        assert_eq!(summary.daily_sales[1].revenue, 500);
    }

    #[test]
    fn test_day_key_counts_characters() {
        assert_eq!(day_key("２０２４年01月05日T10:00"), "２０２４年01月05");
        assert_eq!(day_key("2024-01-05T10:00:00"), "2024-01-05");
    }

    #[test]
    fn test_mock_summary_covers_last_fourteen_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let summary = mock_summary(100_000, today);

        assert_eq!(summary.total_sales, 0);
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.monthly_goal, 100_000);
        assert!(summary.sales_by_product.is_empty());
        assert_eq!(summary.daily_sales.len(), 14);
        assert!(summary.daily_sales.iter().all(|d| d.revenue == 0));
        // Atravessa o fim de fevereiro (ano bissexto)
        assert_eq!(summary.daily_sales[0].date, "2024-02-21");
        assert_eq!(summary.daily_sales[13].date, "2024-03-05");
    }

    #[test]
    fn test_mock_summary_is_deterministic() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(mock_summary(1, today), mock_summary(1, today));
        assert_eq!(mock_summary(1, today).daily_sales[0].date, "2024-12-19");
    }
}
