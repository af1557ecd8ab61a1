use crate::syntax::ListShape;

/// The declared type of a builder parameter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParamType {
    Kind,
    Bool,
    Str,
    Token,
    Node,
    List(ListShape),
}

/// One parameter of a builder function.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuilderParam {
    pub name: String,
    pub ty: ParamType,
    pub optional: bool,

    /// A variadic parameter takes the rest of the arguments: either one list
    /// value or any number of bare elements.
    pub variadic: bool,
}

impl BuilderParam {
    pub fn new(name: &str, ty: ParamType) -> Self {
        Self {
            name: name.to_string(),
            ty,
            optional: false,
            variadic: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Required parameters are neither optional nor variadic.
    pub fn is_required(&self) -> bool {
        !self.optional && !self.variadic
    }

    /// The attribute this parameter fills when the builder runs.
    ///
    /// String-typed `name` and `identifier` parameters fill the node's
    /// `Identifier` token; every other parameter fills the attribute with
    /// its own name.
    pub fn target_attribute(&self) -> &str {
        if self.ty == ParamType::Str
            && (self.name == "name" || self.name == "identifier")
        {
            "Identifier"
        } else {
            self.name.as_str()
        }
    }
}

/// A builder function: a name plus ordered parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuilderSpec {
    pub name: String,
    pub params: Vec<BuilderParam>,
}

impl BuilderSpec {
    pub fn new(name: &str, params: Vec<BuilderParam>) -> Self {
        Self {
            name: name.to_string(),
            params,
        }
    }

    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|param| param.is_required()).count()
    }

    pub fn has_variadic(&self) -> bool {
        self.params.iter().any(|param| param.variadic)
    }

    /// Every parameter-type sequence a call to this builder can present,
    /// with optional parameters either present or left out. A variadic
    /// parameter appears as a single entry.
    pub(crate) fn accepted_shapes(&self) -> Vec<Vec<(ParamType, bool)>> {
        let mut shapes: Vec<Vec<(ParamType, bool)>> = vec![Vec::new()];
        for param in &self.params {
            let entry = (param.ty, param.variadic);
            if param.optional {
                let mut with_param = shapes.clone();
                for shape in &mut with_param {
                    shape.push(entry);
                }
                shapes.extend(with_param);
            } else {
                for shape in &mut shapes {
                    shape.push(entry);
                }
            }
        }
        shapes
    }
}
