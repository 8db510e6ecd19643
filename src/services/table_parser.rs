//! 表格解析服务 - 业务能力层
//!
//! 只负责"从一页 HTML 里抽出行"能力，不关心翻页和流程
//!
//! 警戒页基本是 `table > tbody > tr > td` 结构，列的并排可能变动，
//! 主要字段按位置安全提取，多余的尾部列原样透传

use scraper::{ElementRef, Html, Selector};

use crate::error::FetchError;
use crate::models::{PageResult, Row};

/// 数据行至少要有的单元格数
const MIN_CELLS: usize = 3;

/// 表格解析服务
///
/// 职责：
/// - 把一页 HTML 解析成 PageResult
/// - 找不到表格或没有数据行时返回空页信号
/// - 不发起网络请求
/// - 不关心页码
pub struct TableParser {
    table_selector: Selector,
    tbody_selector: Selector,
    tr_selector: Selector,
    td_selector: Selector,
}

impl TableParser {
    /// 创建新的表格解析服务
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            table_selector: parse_selector("table")?,
            tbody_selector: parse_selector("tbody")?,
            tr_selector: parse_selector("tr")?,
            td_selector: parse_selector("td")?,
        })
    }

    /// 解析一页 HTML
    ///
    /// # 参数
    /// - `html`: 页面 HTML 文本
    ///
    /// # 返回
    /// 返回行数据，没有表格或没有有效数据行时返回 `PageResult::Empty`
    pub fn parse(&self, html: &str) -> PageResult {
        let document = Html::parse_document(html);

        let table = match document.select(&self.table_selector).next() {
            Some(table) => table,
            None => return PageResult::Empty,
        };

        // tbody 可能不存在，此时直接在 table 下找行
        let row_scope = table
            .select(&self.tbody_selector)
            .next()
            .unwrap_or(table);

        let mut rows = Vec::new();
        for tr in row_scope.select(&self.tr_selector) {
            let cells: Vec<String> = tr.select(&self.td_selector).map(cell_text).collect();

            // 表头行没有 td，广告行列数不足，全部跳过
            if cells.len() < MIN_CELLS {
                continue;
            }

            rows.push(row_from_cells(&cells));
        }

        PageResult::from_rows(rows)
    }
}

/// 提取单元格的纯文本（各子节点去空白后拼接）
fn cell_text(td: ElementRef) -> String {
    td.text().map(str::trim).collect::<String>()
}

/// 按位置把单元格映射到字段
///
/// 想定列序: [順位, コード, 銘柄名, 市場, 現在値, 前日比, 前日比%, 出来高, 時刻, ...]
fn row_from_cells(cells: &[String]) -> Row {
    let safe = |idx: usize| cells.get(idx).cloned().unwrap_or_default();

    Row {
        code: safe(1),
        name: safe(2),
        market: safe(3),
        price: safe(4),
        diff: safe(5),
        diff_rate: safe(6),
        volume: safe(7),
        time: safe(8),
        extras: cells.get(9..).map(<[String]>::to_vec).unwrap_or_default(),
    }
}

fn parse_selector(selector: &str) -> Result<Selector, FetchError> {
    Selector::parse(selector).map_err(|_| FetchError::selector_invalid(selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> TableParser {
        TableParser::new().unwrap()
    }

    const SAMPLE_PAGE: &str = r#"
        <html><body>
        <table>
          <thead><tr><th>順位</th><th>コード</th><th>銘柄名</th></tr></thead>
          <tbody>
            <tr>
              <td>1</td><td>7203</td><td>トヨタ</td><td>東証Ｐ</td>
              <td>2,500</td><td>+120</td><td>+5.04%</td><td>45,600</td><td>23:01</td>
            </tr>
            <tr>
              <td>2</td><td>6758</td><td>ソニーＧ</td><td>東証Ｐ</td>
              <td>13,000</td><td>+300</td><td>+2.36%</td><td>8,900</td><td>23:00</td>
              <td>15.2</td><td>2.1</td>
            </tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_extracts_rows_in_order() {
        let result = parser().parse(SAMPLE_PAGE);
        let rows = result.into_rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "7203");
        assert_eq!(rows[0].name, "トヨタ");
        assert_eq!(rows[0].market, "東証Ｐ");
        assert_eq!(rows[0].price, "2,500");
        assert_eq!(rows[0].volume, "45,600");
        assert_eq!(rows[0].time, "23:01");
        assert!(rows[0].extras.is_empty());
    }

    #[test]
    fn test_parse_passes_trailing_columns_through() {
        let rows = parser().parse(SAMPLE_PAGE).into_rows();
        assert_eq!(rows[1].extras, vec!["15.2".to_string(), "2.1".to_string()]);
    }

    #[test]
    fn test_parse_returns_empty_without_table() {
        let result = parser().parse("<html><body><p>メンテナンス中</p></body></html>");
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_returns_empty_for_table_without_rows() {
        let html = "<table><thead><tr><th>コード</th></tr></thead><tbody></tbody></table>";
        assert!(parser().parse(html).is_empty());
    }

    #[test]
    fn test_parse_skips_short_rows() {
        let html = r#"
            <table><tbody>
              <tr><td>広告</td></tr>
              <tr><td>1</td><td>9984</td><td>ＳＢＧ</td><td>東証Ｐ</td></tr>
            </tbody></table>
        "#;
        let rows = parser().parse(html).into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "9984");
        // 不足的尾部字段保持空字符串
        assert_eq!(rows[0].price, "");
        assert_eq!(rows[0].time, "");
    }

    #[test]
    fn test_parse_handles_table_without_tbody() {
        let html = r#"
            <table>
              <tr><td>1</td><td>7203</td><td>トヨタ</td><td>東証Ｐ</td></tr>
            </table>
        "#;
        let rows = parser().parse(html).into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "7203");
    }

    #[test]
    fn test_cell_text_strips_nested_whitespace() {
        let html = r#"
            <table><tbody>
              <tr>
                <td>1</td>
                <td><a href="/stock?code=7203"> 7203 </a></td>
                <td>
                  トヨタ
                </td>
                <td>東証Ｐ</td>
              </tr>
            </tbody></table>
        "#;
        let rows = parser().parse(html).into_rows();
        assert_eq!(rows[0].code, "7203");
        assert_eq!(rows[0].name, "トヨタ");
    }
}
