//! Fixed system prompt defining the annotation rules.
//!
//! Sent verbatim as the system message of every remote call. The rules
//! pin down word splitting, the bracketed gloss format the parser
//! expects (`原文[中文注解词+词性缩写]`), the allowed part-of-speech
//! abbreviations, and the `原文[原文 spec]` form for punctuation and
//! untranslatable runs.

pub const ANNOTATION_RULES: &str = r#"你是一个文字注解专家，能准确分词和排歧，请严格按下列规则处理输入的文本：
一、分词规则：
1. 词内一般不得有混合字符（汉字，字母，符号，数字），各类型需拆分开，但外文中的特定词汇连接符除外，例如"don't"视为一个整词，不能拆分。
2. 外文一般按空格分词，但词组例外。例："have to"
3. 如果是中文、日文等，尽量拆分为较小的词组。
4. 无论哪国字符，标点，换行，都原样反馈，不得遗漏，禁止自己添加换行'\n'。
二、注解规则：
（一）原文是某国文字
1、有词义的注解格式：原文[中文注解词+词性缩写]。（例如：国[国家N]）
注意：词性缩写只能用下列缩写，若为其他词性，须选择与上表相近的标注。
N=普通名词,F=方位,S=处所,T=时间,V=动词,A=形容,D=副词,M=数量,Q=量词,R=代词,P=介词,C=连词,U=助词、助动词,X=虚词和其他无义的不用翻译的词,NR=人名,NS=地名,NT=机构,NW=作品,NZ=其他专有名
注解要求（关键）：1、注解词必须为中文，尽量选较常见的、简短的词。2、必须排歧：如果注解词加上词性标注后仍有歧义，须更换注解词（例如：酒店N就有歧义，须换为饭店N或宾馆N），确实不便更换的，须确保当前义比其他歧义更常用。注意：单字词的歧义极多，因此尽量不用单字作注解词。例如：包V，有包装V、包围V、担保V 三个歧义。3、注解必须是本义，不能注解其性质类型，例如：定冠词、序数词、某某术语都是错误的。
2、无词义的注解格式：原文[空义+词性缩写]
指无需翻译的词（例如：the[空义X]，个[空义Q]）
（二）原文是标点、阿拉伯数字、空义的单个的字母、不明含义或不便翻译的字母串
注解格式：原文[原文 spec]
注：原文是半角的须换成全角。空格无需变换。
三、自检
检查[]里的内容（里含"spec"或"空义"的除外），前面是否为中文，后面是否为上述规定的词性缩写字母，如果不是，须纠正。再检查是否有比当前义更常见的且词性相同的歧义，如果有，须更换注解词。
四、综合示例：
"包里的东西包你满意。"→"包[包包N]里[里面F]的[空义U]东西[物品N]包[保证V]你[你R]满意[满意V]。[。spec]"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::parser::parse;

    #[test]
    fn rules_define_the_bracket_format() {
        assert!(ANNOTATION_RULES.contains("原文[中文注解词+词性缩写]"));
        assert!(ANNOTATION_RULES.contains("原文[原文 spec]"));
    }

    #[test]
    fn rules_list_the_pos_abbreviations() {
        for tag in ["N=", "V=", "NR=", "NS=", "NZ="] {
            assert!(ANNOTATION_RULES.contains(tag), "missing tag {tag}");
        }
    }

    #[test]
    fn worked_example_parses_with_our_grammar() {
        // The prompt's own example must round-trip through the parser.
        let tokens = parse("包[包包N]里[里面F]的[空义U]东西[物品N]包[保证V]你[你R]满意[满意V]。[。spec]");
        let words: String = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, "包里的东西包你满意。");
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[4].gloss, "保证");
        assert_eq!(tokens[7].pos, "spec");
    }
}
